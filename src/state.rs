/// Gesture state of the editor.
///
/// ```text
///            pointer_down
///   ┌──────┐ ───────────► ┌──────────┐
///   │ Idle │              │ Dragging │ ◄─┐ pointer_move
///   └──────┘ ◄─────────── └──────────┘ ──┘
///            pointer_up / pointer_leave
/// ```
///
/// A gesture exists only between press and release and is never persisted.
use crate::grid::Cell;
use crate::tool::Tool;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorState {
    /// No pointer is held down over the canvas
    #[default]
    Idle,
    /// A pointer went down and has not been released yet
    Dragging {
        /// Tool captured at press time; it drives the whole gesture
        tool: Tool,
        /// Cell where the pointer went down
        start: Cell,
        /// Last cell reported for this gesture, used when the drag is abandoned
        last: Cell,
    },
}

impl EditorState {
    pub fn begin(tool: Tool, cell: Cell) -> Self {
        EditorState::Dragging {
            tool,
            start: cell,
            last: cell,
        }
    }

    /// Validates whether a transition to the new state is allowed
    pub fn can_transition_to(&self, new_state: &EditorState) -> bool {
        match (self, new_state) {
            (EditorState::Idle, EditorState::Dragging { .. }) => true,
            (EditorState::Dragging { .. }, EditorState::Idle) => true,
            // Moves stay within one gesture
            (
                EditorState::Dragging { tool, start, .. },
                EditorState::Dragging {
                    tool: next_tool,
                    start: next_start,
                    ..
                },
            ) => tool == next_tool && start == next_start,
            (EditorState::Idle, EditorState::Idle) => true,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, EditorState::Dragging { .. })
    }

    pub fn start_cell(&self) -> Option<Cell> {
        match self {
            EditorState::Dragging { start, .. } => Some(*start),
            EditorState::Idle => None,
        }
    }

    pub fn last_cell(&self) -> Option<Cell> {
        match self {
            EditorState::Dragging { last, .. } => Some(*last),
            EditorState::Idle => None,
        }
    }

    /// Record the latest pointer cell of the active gesture
    pub fn track(&mut self, cell: Cell) {
        if let EditorState::Dragging { last, .. } = self {
            *last = cell;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gesture_lifecycle() {
        let mut state = EditorState::begin(Tool::Line, Cell::new(1, 2));
        assert!(state.is_dragging());
        assert_eq!(state.last_cell(), Some(Cell::new(1, 2)));

        state.track(Cell::new(5, 6));
        assert_eq!(state.start_cell(), Some(Cell::new(1, 2)));
        assert_eq!(state.last_cell(), Some(Cell::new(5, 6)));

        let mut idle = EditorState::default();
        idle.track(Cell::new(3, 3));
        assert_eq!(idle, EditorState::Idle);
        assert_eq!(idle.last_cell(), None);
    }

    #[test]
    fn test_transitions() {
        let idle = EditorState::Idle;
        let drag = EditorState::begin(Tool::Pencil, Cell::new(0, 0));
        let mut moved = drag;
        moved.track(Cell::new(4, 0));

        assert!(idle.can_transition_to(&drag));
        assert!(drag.can_transition_to(&idle));
        assert!(drag.can_transition_to(&moved));
        // A different tool or start point is a new gesture, not a move
        let other_tool = EditorState::begin(Tool::Eraser, Cell::new(0, 0));
        let other_start = EditorState::begin(Tool::Pencil, Cell::new(1, 0));
        assert!(!drag.can_transition_to(&other_tool));
        assert!(!drag.can_transition_to(&other_start));
    }
}
