// Editor module for EASEL.

pub mod canvas;
pub mod history;
pub mod session;
pub mod tools;

pub use canvas::{CanvasHost, CanvasSnapshot};
pub use history::{HistoryError, HistoryLog};
pub use session::DrawingSession;
pub use tools::{parse_hex_color, BrushMode, DrawingOptions, EditorError};
