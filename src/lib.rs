#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod config;
pub mod editor;
pub mod error;
pub mod event;
pub mod export;
pub mod grid;
pub mod history;
pub mod input;
pub mod palette;
pub mod raster;
pub mod renderer;
pub mod state;
pub mod tool;

pub use app::PixelForgeApp;
pub use color::Color;
pub use config::EditorSettings;
pub use editor::Editor;
pub use error::{EditorError, Result};
pub use event::{EditorEvent, EventBus, EventHandler};
pub use grid::{Cell, Grid};
pub use history::GridHistory;
pub use raster::Shape;
pub use state::EditorState;
pub use tool::{Tool, ToolMode};
