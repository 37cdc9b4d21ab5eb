use thiserror::Error;

/// Errors reported by the editor.
///
/// Only configuration and export can fail. Pointer events, undo and redo
/// absorb out-of-range input instead of erroring.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Canvas dimensions outside the supported range
    #[error(
        "invalid canvas size {width}x{height}: both sides must be within {min}..={max}",
        min = crate::grid::MIN_DIMENSION,
        max = crate::grid::MAX_DIMENSION
    )]
    InvalidDimensions { width: usize, height: usize },

    /// Tool identifier that does not name one of the editor tools
    #[error("unknown tool: {0:?}")]
    UnknownTool(String),

    /// Color string that is neither `transparent` nor a hex RGB value
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// Zoom factor that is not one of the supported levels
    #[error("unsupported zoom level: {0}")]
    InvalidZoom(u32),

    #[error("malformed settings: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("image export failed: {0}")]
    Export(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EditorError>;
