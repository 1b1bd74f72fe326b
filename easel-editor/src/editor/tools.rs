// Drawing tool settings for the canvas editor.

use egui::Color32;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

/// Kind of free-drawing brush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrushMode {
    #[default]
    Pencil,
    Marker,
    Spray,
}

impl BrushMode {
    pub fn name(&self) -> &'static str {
        match self {
            BrushMode::Pencil => "Pencil",
            BrushMode::Marker => "Marker",
            BrushMode::Spray => "Spray",
        }
    }
}

/// Brush configuration used while drawing mode is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawingOptions {
    /// Stroke width in pixels.
    pub brush_size: u32,
    pub brush_color: Color32,
    pub mode: BrushMode,
}

impl Default for DrawingOptions {
    fn default() -> Self {
        Self {
            brush_size: 5,
            brush_color: Color32::BLACK,
            mode: BrushMode::Pencil,
        }
    }
}

impl DrawingOptions {
    pub fn cursor_size(&self) -> u32 {
        self.brush_size.max(1)
    }
}

/// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
pub fn parse_hex_color(value: &str) -> Result<Color32, EditorError> {
    let color = Color32::from_hex(value.trim()).map_err(|_| EditorError::InvalidColor {
        value: value.to_string(),
    })?;
    trace!(value, ?color, "parsed hex color");
    Ok(color)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditorError {
    #[error("invalid color {value:?}: expected a hex color like #1e90ff")]
    InvalidColor { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = DrawingOptions::default();
        assert_eq!(options.brush_size, 5);
        assert_eq!(options.brush_color, Color32::BLACK);
        assert_eq!(options.mode, BrushMode::Pencil);
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#000000"), Ok(Color32::BLACK));
        assert_eq!(
            parse_hex_color("#ff0000"),
            Ok(Color32::from_rgb(255, 0, 0))
        );
    }

    #[test]
    fn test_parse_hex_color_rejects_names() {
        assert_eq!(
            parse_hex_color("blue"),
            Err(EditorError::InvalidColor {
                value: "blue".into()
            })
        );
    }

    #[test]
    fn test_brush_mode_names() {
        assert_eq!(BrushMode::Spray.name(), "Spray");
        let mode: BrushMode = serde_json::from_str("\"marker\"").unwrap();
        assert_eq!(mode, BrushMode::Marker);
    }

    #[test]
    fn test_cursor_size_never_zero() {
        let options = DrawingOptions {
            brush_size: 0,
            ..Default::default()
        };
        assert_eq!(options.cursor_size(), 1);
    }
}
