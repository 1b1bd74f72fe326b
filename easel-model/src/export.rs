//! Export requests for EASEL designs.
//!
//! Describes *what* to export (format, file name, quality, scale, background).
//! Producing the bytes is the canvas library's job; this module only settles
//! and validates the parameters handed to it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Png,  // lossless, keeps transparency
    Jpeg, // lossy, best for photos
    Svg,  // vector
    Json, // editor's own canvas state
    Pdf,  // document
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::Png,
        ExportFormat::Jpeg,
        ExportFormat::Svg,
        ExportFormat::Json,
        ExportFormat::Pdf,
    ];

    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
            ExportFormat::Svg => "svg",
            ExportFormat::Json => "json",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// Extensions that already name this format; the first is the preferred one.
    pub fn accepted_extensions(&self) -> &'static [&'static str] {
        match self {
            ExportFormat::Png => &["png"],
            ExportFormat::Jpeg => &["jpg", "jpeg"],
            ExportFormat::Svg => &["svg"],
            ExportFormat::Json => &["json"],
            ExportFormat::Pdf => &["pdf"],
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg => "image/jpeg",
            ExportFormat::Svg => "image/svg+xml",
            ExportFormat::Json => "application/json",
            ExportFormat::Pdf => "application/pdf",
        }
    }

    /// Pixel output (as opposed to vector or data).
    pub fn is_raster(&self) -> bool {
        matches!(self, ExportFormat::Png | ExportFormat::Jpeg)
    }

    /// Only lossy formats honor a quality setting.
    pub fn supports_quality(&self) -> bool {
        matches!(self, ExportFormat::Jpeg)
    }

    pub fn default_quality(&self) -> f32 {
        match self {
            ExportFormat::Jpeg => 0.8,
            _ => 1.0,
        }
    }

    /// Whether the output can keep a transparent background.
    pub fn supports_transparency(&self) -> bool {
        !matches!(self, ExportFormat::Jpeg | ExportFormat::Pdf)
    }
}

/// One export job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub format: ExportFormat,
    pub filename: String,
    /// 0.0 exclusive to 1.0 inclusive. Ignored by lossless formats.
    pub quality: f32,
    /// Output size multiplier for raster formats.
    pub scale: f32,
    pub include_background: bool,
}

impl ExportRequest {
    /// `design.<ext>` at the format's default quality and 1x scale.
    pub fn new(format: ExportFormat) -> Self {
        tracing::debug!(?format, "creating export request");
        Self {
            format,
            filename: format!("design.{}", format.extension()),
            quality: format.default_quality(),
            scale: 1.0,
            include_background: true,
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    pub fn with_quality(mut self, quality: f32) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Percent value from the export page slider (1-100).
    pub fn with_quality_percent(self, percent: u8) -> Self {
        self.with_quality(f32::from(percent) / 100.0)
    }

    pub fn validate(&self) -> Result<(), ExportError> {
        if !(self.quality > 0.0 && self.quality <= 1.0) {
            tracing::error!(quality = self.quality, "quality must be in (0.0, 1.0]");
            return Err(ExportError::InvalidQuality {
                quality: self.quality,
            });
        }

        if !(self.scale.is_finite() && self.scale > 0.0) {
            tracing::error!(scale = self.scale, "scale must be positive");
            return Err(ExportError::InvalidScale { scale: self.scale });
        }

        if self.filename.trim().is_empty() {
            tracing::error!("export filename is empty");
            return Err(ExportError::InvalidFilename {
                reason: "filename is empty".into(),
            });
        }

        let invalid_chars = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];
        for ch in invalid_chars {
            if self.filename.contains(ch) {
                tracing::error!(
                    filename = %self.filename,
                    invalid_char = %ch,
                    "filename contains invalid character"
                );
                return Err(ExportError::InvalidFilename {
                    reason: format!("contains invalid character '{}'", ch),
                });
            }
        }

        if !self.include_background && !self.format.supports_transparency() {
            tracing::warn!(
                format = ?self.format,
                "format cannot keep a transparent background; it will be filled"
            );
        }

        Ok(())
    }

    /// File name with the format's extension appended when missing.
    pub fn file_name(&self) -> String {
        let has_ext = self
            .filename
            .rsplit_once('.')
            .map(|(_, e)| {
                self.format
                    .accepted_extensions()
                    .iter()
                    .any(|accepted| e.eq_ignore_ascii_case(accepted))
            })
            .unwrap_or(false);

        if has_ext {
            self.filename.clone()
        } else {
            format!("{}.{}", self.filename, self.format.extension())
        }
    }
}

/// Export request errors.
#[derive(Debug, Error, PartialEq)]
pub enum ExportError {
    #[error("invalid quality {quality}: must be in (0.0, 1.0]")]
    InvalidQuality { quality: f32 },

    #[error("invalid scale {scale}: must be positive")]
    InvalidScale { scale: f32 },

    #[error("invalid filename: {reason}")]
    InvalidFilename { reason: String },
}
