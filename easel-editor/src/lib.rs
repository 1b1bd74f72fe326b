//! easel-editor: editing session state for EASEL.
//!
//! Holds the drawing-mode flag, brush options and a linear undo/redo log of
//! canvas snapshots. The canvas itself lives behind [`editor::CanvasHost`].

pub mod config;
pub mod editor;
pub mod logging;

pub use config::{load_config, BrushConfig, ConfigError, EditorConfig, HistoryConfig};
pub use editor::{
    BrushMode, CanvasHost, CanvasSnapshot, DrawingOptions, DrawingSession, EditorError,
    HistoryError, HistoryLog,
};
pub use logging::{init_tracing, DEFAULT_LOG_DIRECTIVE};
