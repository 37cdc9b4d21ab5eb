//! The editing session driven by the UI.
//!
//! Owns the committed grid (through its history), the transient preview of a
//! drag-shape gesture, the active tool and the current color. Pointer events
//! arrive as already-clamped cells.

use image::RgbaImage;
use log::{debug, info, warn};

use crate::color::Color;
use crate::config::{EditorSettings, FALLBACK_DIMENSION};
use crate::error::Result;
use crate::event::{EditorEvent, EventBus};
use crate::grid::{Cell, Grid};
use crate::history::GridHistory;
use crate::raster;
use crate::state::EditorState;
use crate::tool::Tool;

#[derive(Debug)]
pub struct Editor {
    history: GridHistory,
    /// Shown instead of the committed grid while a shape is being dragged
    preview: Option<Grid>,
    state: EditorState,
    tool: Tool,
    color: Color,
    event_bus: EventBus,
}

impl Default for Editor {
    /// A 32x32 canvas with the pencil and black selected
    fn default() -> Self {
        Self::with_grid(Grid::blank(FALLBACK_DIMENSION, FALLBACK_DIMENSION))
    }
}

impl Editor {
    /// Creates an editor with a blank `width` x `height` canvas
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Ok(Self::with_grid(Grid::new(width, height)?))
    }

    fn with_grid(grid: Grid) -> Self {
        Self {
            history: GridHistory::new(grid),
            preview: None,
            state: EditorState::Idle,
            tool: Tool::default(),
            color: Color::BLACK,
            event_bus: EventBus::new(),
        }
    }

    /// Creates an editor from validated settings
    pub fn from_settings(settings: &EditorSettings) -> Result<Self> {
        settings.validate()?;
        let mut editor = Self::new(settings.canvas_width, settings.canvas_height)?;
        editor.tool = settings.tool;
        editor.color = settings.current_color;
        Ok(editor)
    }

    /// Recreate the canvas and reset history.
    ///
    /// Invalid sizes are rejected and leave the editor untouched. Resizing is
    /// not undoable; any gesture in progress is discarded.
    pub fn configure_canvas(&mut self, width: usize, height: usize) -> Result<()> {
        let grid = Grid::new(width, height)?;
        self.transition_to(EditorState::Idle);
        self.preview = None;
        self.history.reset(grid);
        info!("Canvas configured to {}x{}", width, height);
        self.event_bus
            .emit(EditorEvent::CanvasConfigured { width, height });
        Ok(())
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Select the active tool, finishing any gesture in progress first
    pub fn set_tool(&mut self, tool: Tool) {
        self.finish_gesture();
        self.switch_tool(tool);
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        if self.color != color {
            self.color = color;
            self.event_bus.emit(EditorEvent::ColorChanged(color));
        }
    }

    /// The committed grid
    pub fn grid(&self) -> &Grid {
        self.history.current()
    }

    /// What the display should show: the preview while dragging a shape,
    /// the committed grid otherwise
    pub fn display_grid(&self) -> &Grid {
        self.preview.as_ref().unwrap_or_else(|| self.history.current())
    }

    pub fn preview(&self) -> Option<&Grid> {
        self.preview.as_ref()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn width(&self) -> usize {
        self.grid().width()
    }

    pub fn height(&self) -> usize {
        self.grid().height()
    }

    pub fn pointer_down(&mut self, cell: Cell) {
        if self.state.is_dragging() {
            self.finish_gesture();
        }

        let tool = self.tool;
        if !self.transition_to(EditorState::begin(tool, cell)) {
            return;
        }

        match tool {
            Tool::Pencil | Tool::Eraser => self.paint(tool, cell),
            Tool::Fill => {
                let filled = raster::flood_fill(self.grid(), cell.x, cell.y, self.color);
                self.commit(filled);
            }
            Tool::Eyedropper => self.pick_color(cell),
            Tool::Line | Tool::Rectangle | Tool::Circle => {}
        }
    }

    pub fn pointer_move(&mut self, cell: Cell) {
        let EditorState::Dragging { tool, start, .. } = self.state else {
            return;
        };
        let mut next = self.state;
        next.track(cell);
        self.transition_to(next);

        match tool {
            Tool::Pencil | Tool::Eraser => self.paint(tool, cell),
            // Fill and eyedropper act once per press
            Tool::Fill | Tool::Eyedropper => {}
            Tool::Line | Tool::Rectangle | Tool::Circle => {
                if let Some(shape) = tool.shape() {
                    self.preview = Some(shape.draw(self.grid(), start, cell, self.color));
                }
            }
        }
    }

    pub fn pointer_up(&mut self, cell: Cell) {
        let EditorState::Dragging { tool, start, .. } = self.state else {
            warn!("Ignoring pointer release without a press at {:?}", cell);
            return;
        };

        if let Some(shape) = tool.shape() {
            let shaped = shape.draw(self.grid(), start, cell, self.color);
            self.commit(shaped);
        }
        if self.preview.take().is_some() {
            debug!("Preview discarded");
        }
        self.transition_to(EditorState::Idle);
    }

    /// The pointer left the canvas without a release; treated as a release at
    /// the last known cell
    pub fn pointer_leave(&mut self) {
        self.finish_gesture();
    }

    /// Step back one snapshot. Returns whether the committed grid changed.
    pub fn undo(&mut self) -> bool {
        self.finish_gesture();
        if !self.history.can_undo() {
            return false;
        }
        self.history.undo();
        debug!("Undo to snapshot {}", self.history.cursor());
        self.event_bus.emit(EditorEvent::Undone);
        true
    }

    /// Step forward one snapshot. Returns whether the committed grid changed.
    pub fn redo(&mut self) -> bool {
        self.finish_gesture();
        if !self.history.can_redo() {
            return false;
        }
        self.history.redo();
        debug!("Redo to snapshot {}", self.history.cursor());
        self.event_bus.emit(EditorEvent::Redone);
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Replace the canvas with a blank one of the same size, as an undoable edit
    pub fn clear(&mut self) {
        self.finish_gesture();
        let blank = self.grid().blank_like();
        if self.commit(blank) {
            info!("Canvas cleared");
            self.event_bus.emit(EditorEvent::Cleared);
        }
    }

    /// Flatten the committed grid for export
    pub fn export_image(&self, background: Color) -> RgbaImage {
        info!(
            "Exporting {}x{} image with background {}",
            self.width(),
            self.height(),
            background
        );
        self.grid().to_flat_image(background)
    }

    /// Subscribe a handler to every editor event
    pub fn subscribe(&self, handler: impl FnMut(&EditorEvent) + 'static) {
        self.event_bus.subscribe(handler);
    }

    /// Invoke `callback` whenever the eyedropper picks a color
    pub fn on_color_picked(&self, mut callback: impl FnMut(Color) + 'static) {
        self.subscribe(move |event: &EditorEvent| {
            if let EditorEvent::ColorPicked(color) = event {
                callback(*color);
            }
        });
    }

    /// Pencil and eraser write one cell per event
    fn paint(&mut self, tool: Tool, cell: Cell) {
        let color = match tool {
            Tool::Eraser => Color::Transparent,
            _ => self.color,
        };
        let next = raster::set_pixel(self.grid(), cell.x, cell.y, color);
        self.commit(next);
    }

    fn pick_color(&mut self, cell: Cell) {
        match self.grid().get(cell.x, cell.y) {
            Some(color) if !color.is_transparent() => {
                debug!("Picked {} at {:?}", color, cell);
                self.event_bus.emit(EditorEvent::ColorPicked(color));
                self.set_color(color);
                // The gesture keeps the eyedropper; only later presses use the pencil
                self.switch_tool(Tool::Pencil);
            }
            _ => {}
        }
    }

    fn switch_tool(&mut self, tool: Tool) {
        if self.tool == tool {
            return;
        }
        let old = std::mem::replace(&mut self.tool, tool);
        debug!("Tool changed from {} to {}", old, tool);
        self.event_bus.emit(EditorEvent::ToolChanged { old, new: tool });
    }

    /// Move the gesture state machine, refusing transitions it does not allow
    fn transition_to(&mut self, next: EditorState) -> bool {
        if !self.state.can_transition_to(&next) {
            warn!("Refusing state transition from {:?} to {:?}", self.state, next);
            return false;
        }
        self.state = next;
        true
    }

    /// End an active gesture as if released at its last known cell
    fn finish_gesture(&mut self) {
        if let Some(last) = self.state.last_cell() {
            self.pointer_up(last);
        }
    }

    fn commit(&mut self, grid: Grid) -> bool {
        let changed = self.history.commit(grid);
        if changed {
            debug!("Committed snapshot, {} in history", self.history.len());
            self.event_bus.emit(EditorEvent::Committed {
                entries: self.history.len(),
            });
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_guard_keeps_active_gesture() {
        let mut editor = Editor::new(8, 8).unwrap();
        editor.set_tool(Tool::Line);
        editor.pointer_down(Cell::new(1, 1));

        // Swapping the tool or start point mid-gesture is not a move
        let other_tool = EditorState::begin(Tool::Pencil, Cell::new(1, 1));
        let other_start = EditorState::begin(Tool::Line, Cell::new(4, 4));
        assert!(!editor.transition_to(other_tool));
        assert!(!editor.transition_to(other_start));
        assert_eq!(editor.state().start_cell(), Some(Cell::new(1, 1)));
        assert_eq!(editor.state().last_cell(), Some(Cell::new(1, 1)));

        editor.pointer_move(Cell::new(3, 1));
        assert_eq!(editor.state().last_cell(), Some(Cell::new(3, 1)));
        assert!(editor.transition_to(EditorState::Idle));
        assert!(editor.state().is_idle());
    }
}
