use egui::{Key, Modifiers, Pos2, Rect};

use crate::grid::Cell;
use crate::tool::Tool;

/// Maps device positions on the painted canvas to grid cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasMapper {
    /// Screen rectangle the canvas is painted into
    pub rect: Rect,
    /// Screen pixels per cell
    pub zoom: f32,
    pub width: usize,
    pub height: usize,
}

impl CanvasMapper {
    pub fn new(rect: Rect, zoom: f32, width: usize, height: usize) -> Self {
        Self {
            rect,
            zoom,
            width,
            height,
        }
    }

    /// Cell under `pos`, clamped into the grid so drags past the edge keep
    /// hitting the border cells
    pub fn cell_at(&self, pos: Pos2) -> Cell {
        let zoom = self.zoom.max(f32::EPSILON);
        let x = ((pos.x - self.rect.min.x) / zoom).floor() as i32;
        let y = ((pos.y - self.rect.min.y) / zoom).floor() as i32;
        Cell::new(
            x.clamp(0, self.width as i32 - 1),
            y.clamp(0, self.height as i32 - 1),
        )
    }

    pub fn contains(&self, pos: Pos2) -> bool {
        self.rect.contains(pos)
    }

    /// Screen rectangle covered by `cell`
    pub fn cell_rect(&self, cell: Cell) -> Rect {
        let min = self.rect.min + egui::vec2(cell.x as f32, cell.y as f32) * self.zoom;
        Rect::from_min_size(min, egui::vec2(self.zoom, self.zoom))
    }
}

/// Keyboard commands understood by the editor window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    SelectTool(Tool),
    Undo,
    Redo,
}

/// Resolve a key press to an editor command.
///
/// Tool letters work without modifiers; Ctrl/Cmd+Z undoes, Ctrl/Cmd+Shift+Z
/// and Ctrl/Cmd+Y redo.
pub fn shortcut_for(key: Key, modifiers: Modifiers) -> Option<Shortcut> {
    if modifiers.command {
        return match key {
            Key::Z if modifiers.shift => Some(Shortcut::Redo),
            Key::Z => Some(Shortcut::Undo),
            Key::Y => Some(Shortcut::Redo),
            _ => None,
        };
    }

    let letter = match key {
        Key::P => 'P',
        Key::E => 'E',
        Key::F => 'F',
        Key::I => 'I',
        Key::L => 'L',
        Key::R => 'R',
        Key::C => 'C',
        _ => return None,
    };
    Tool::from_shortcut(letter).map(Shortcut::SelectTool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn mapper() -> CanvasMapper {
        CanvasMapper::new(
            Rect::from_min_size(pos2(100.0, 50.0), egui::vec2(320.0, 160.0)),
            10.0,
            32,
            16,
        )
    }

    #[test]
    fn test_cell_at_divides_by_zoom() {
        let m = mapper();
        assert_eq!(m.cell_at(pos2(100.0, 50.0)), Cell::new(0, 0));
        assert_eq!(m.cell_at(pos2(125.0, 79.9)), Cell::new(2, 2));
        assert_eq!(m.cell_at(pos2(419.0, 209.0)), Cell::new(31, 15));
    }

    #[test]
    fn test_cell_at_clamps_outside_positions() {
        let m = mapper();
        assert_eq!(m.cell_at(pos2(0.0, 0.0)), Cell::new(0, 0));
        assert_eq!(m.cell_at(pos2(2000.0, 2000.0)), Cell::new(31, 15));
        assert_eq!(m.cell_at(pos2(95.0, 120.0)), Cell::new(0, 7));
    }

    #[test]
    fn test_cell_rect_round_trips_cell_at() {
        let m = mapper();
        let rect = m.cell_rect(Cell::new(3, 4));
        assert_eq!(rect.min, pos2(130.0, 90.0));
        assert_eq!(m.cell_at(rect.center()), Cell::new(3, 4));
    }

    #[test]
    fn test_tool_shortcuts() {
        let select = |key| shortcut_for(key, Modifiers::NONE);
        assert_eq!(select(Key::P), Some(Shortcut::SelectTool(Tool::Pencil)));
        assert_eq!(select(Key::I), Some(Shortcut::SelectTool(Tool::Eyedropper)));
        assert_eq!(select(Key::C), Some(Shortcut::SelectTool(Tool::Circle)));
        assert_eq!(select(Key::X), None);
    }

    #[test]
    fn test_history_shortcuts() {
        let command = Modifiers::COMMAND;
        let command_shift = Modifiers {
            shift: true,
            ..Modifiers::COMMAND
        };
        assert_eq!(shortcut_for(Key::Z, command), Some(Shortcut::Undo));
        assert_eq!(shortcut_for(Key::Z, command_shift), Some(Shortcut::Redo));
        assert_eq!(shortcut_for(Key::Y, command), Some(Shortcut::Redo));
        // Ctrl+C must not switch to the circle tool
        assert_eq!(shortcut_for(Key::C, command), None);
    }
}
