//! Editor configuration.
//!
//! Loaded from JSON; every field is optional and falls back to the editor's
//! built-in defaults (unbounded history, 5px black pencil).

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::editor::tools::{parse_hex_color, BrushMode, DrawingOptions};
use crate::editor::HistoryError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub history: HistoryConfig,
    pub brush: BrushConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum snapshots kept for undo. None = unlimited.
    #[serde(default)]
    pub max_states: Option<usize>,
}

/// Brush the session starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrushConfig {
    #[serde(default = "default_brush_size")]
    pub size: u32,

    #[serde(default = "default_brush_color")]
    pub color: String,

    #[serde(default)]
    pub mode: BrushMode,
}

fn default_brush_size() -> u32 {
    5
}

fn default_brush_color() -> String {
    "#000000".into()
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            size: default_brush_size(),
            color: default_brush_color(),
            mode: BrushMode::default(),
        }
    }
}

impl BrushConfig {
    pub fn to_options(&self) -> Result<DrawingOptions, ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroBrushSize);
        }

        let brush_color =
            parse_hex_color(&self.color).map_err(|_| ConfigError::InvalidBrushColor {
                value: self.color.clone(),
            })?;

        Ok(DrawingOptions {
            brush_size: self.size,
            brush_color,
            mode: self.mode,
        })
    }
}

impl EditorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history.max_states == Some(0) {
            tracing::error!("history.max_states must be at least 1");
            return Err(ConfigError::History(HistoryError::ZeroCapacity));
        }

        if let Err(e) = self.brush.to_options() {
            tracing::error!(error = %e, "invalid brush configuration");
            return Err(e);
        }

        Ok(())
    }

    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: EditorConfig = serde_json::from_str(json).context("parse editor config json")?;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error(transparent)]
    History(#[from] HistoryError),

    #[error("brush size must be at least 1px")]
    ZeroBrushSize,

    #[error("invalid brush color {value:?}")]
    InvalidBrushColor { value: String },
}

/// Load and validate editor configuration from a JSON file.
pub fn load_config(path: impl AsRef<Path>) -> anyhow::Result<EditorConfig> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config file: {}", path.display()))?;
    let config = EditorConfig::from_json_str(&data)
        .with_context(|| format!("load config file: {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded editor config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.history.max_states, None);
        assert_eq!(config.brush.size, 5);
        assert_eq!(config.brush.color, "#000000");
        assert_eq!(config.brush.mode, BrushMode::Pencil);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = EditorConfig::from_json_str(r#"{"brush": {"mode": "spray"}}"#).unwrap();
        assert_eq!(config.brush.mode, BrushMode::Spray);
        assert_eq!(config.brush.size, 5);
        assert_eq!(config.history.max_states, None);

        let empty = EditorConfig::from_json_str("{}").unwrap();
        assert_eq!(empty, EditorConfig::default());
    }

    #[test]
    fn test_zero_history_rejected() {
        let err = EditorConfig::from_json_str(r#"{"history": {"max_states": 0}}"#).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::History(HistoryError::ZeroCapacity))
        );
    }

    #[test]
    fn test_bad_brush_rejected() {
        let mut config = EditorConfig::default();
        config.brush.size = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroBrushSize));

        let mut config = EditorConfig::default();
        config.brush.color = "black".into();
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidBrushColor {
                value: "black".into()
            })
        );
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r##"{{"history": {{"max_states": 100}}, "brush": {{"size": 3, "color": "#336699"}}}}"##
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.history.max_states, Some(100));
        assert_eq!(config.brush.size, 3);
        assert_eq!(config.brush.color, "#336699");
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("read config file"));
    }
}
