use crate::color::Color;
use crate::tool::Tool;

/// Notifications published by the editor to its UI collaborator
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    ToolChanged {
        old: Tool,
        new: Tool,
    },
    ColorChanged(Color),
    /// The eyedropper read a painted cell
    ColorPicked(Color),
    /// The canvas was recreated and history reset
    CanvasConfigured {
        width: usize,
        height: usize,
    },
    /// A new snapshot entered the history
    Committed {
        entries: usize,
    },
    Undone,
    Redone,
    Cleared,
}
