// Drawing session: drawing-mode flag, brush options and the undo history for one
// open editor. Built when the editor opens a design, dropped when it closes.

use anyhow::Context;
use egui::Color32;
use tracing::{debug, info, trace};

use crate::config::{ConfigError, EditorConfig};
use crate::editor::tools::{parse_hex_color, BrushMode, DrawingOptions, EditorError};
use crate::editor::{CanvasHost, CanvasSnapshot, HistoryLog};

#[derive(Debug, Clone, Default)]
pub struct DrawingSession {
    drawing_mode: bool,
    options: DrawingOptions,
    history: HistoryLog,
}

impl DrawingSession {
    /// Drawing mode off, default brush, unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session seeded from editor configuration.
    pub fn from_config(config: &EditorConfig) -> Result<Self, ConfigError> {
        let options = config.brush.to_options()?;
        let history = HistoryLog::with_limit(config.history.max_states)?;

        info!(
            brush_size = options.brush_size,
            mode = options.mode.name(),
            max_states = ?history.max_states(),
            "starting drawing session"
        );

        Ok(Self {
            drawing_mode: false,
            options,
            history,
        })
    }

    pub fn is_drawing_mode(&self) -> bool {
        self.drawing_mode
    }

    pub fn set_drawing_mode(&mut self, active: bool) {
        debug!(active, "drawing mode");
        self.drawing_mode = active;
    }

    pub fn options(&self) -> &DrawingOptions {
        &self.options
    }

    pub fn set_brush_size(&mut self, size: u32) {
        trace!(size, "brush size");
        self.options.brush_size = size;
    }

    pub fn set_brush_color(&mut self, color: Color32) {
        trace!(?color, "brush color");
        self.options.brush_color = color;
    }

    /// Set the brush color from a hex string. Options are untouched on error.
    pub fn set_brush_color_hex(&mut self, value: &str) -> Result<(), EditorError> {
        let color = parse_hex_color(value)?;
        self.set_brush_color(color);
        Ok(())
    }

    pub fn set_mode(&mut self, mode: BrushMode) {
        trace!(mode = mode.name(), "brush mode");
        self.options.mode = mode;
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn save_state(&mut self, snapshot: impl Into<CanvasSnapshot>) {
        self.history.save(snapshot.into());
    }

    pub fn undo(&mut self) -> Option<CanvasSnapshot> {
        self.history.undo()
    }

    pub fn redo(&mut self) -> Option<CanvasSnapshot> {
        self.history.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Serialize `host` and record it as the newest state.
    pub fn commit<H: CanvasHost + ?Sized>(&mut self, host: &H) -> anyhow::Result<()> {
        let snapshot = host
            .serialize()
            .context("serialize canvas for history")?;
        self.save_state(snapshot);
        Ok(())
    }

    /// Undo and load the resulting state into `host`.
    ///
    /// Returns false when there was nothing to undo. If the host fails to load
    /// the snapshot the pointer has still moved; the error is returned as is.
    pub fn undo_into<H: CanvasHost + ?Sized>(&mut self, host: &mut H) -> anyhow::Result<bool> {
        let Some(snapshot) = self.undo() else {
            return Ok(false);
        };
        host.restore(&snapshot).context("restore canvas after undo")?;
        Ok(true)
    }

    /// Redo and load the resulting state into `host`. See [`Self::undo_into`].
    pub fn redo_into<H: CanvasHost + ?Sized>(&mut self, host: &mut H) -> anyhow::Result<bool> {
        let Some(snapshot) = self.redo() else {
            return Ok(false);
        };
        host.restore(&snapshot).context("restore canvas after redo")?;
        Ok(true)
    }
}
