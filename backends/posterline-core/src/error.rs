// this_file: backends/posterline-core/src/error.rs

//! Error types for the posterline engine.
//!
//! Only the internal, fallible steps (face parsing, font instantiation,
//! canvas painting, config parsing) produce these. The public layout
//! operations recover from every one of them locally and log instead.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for posterline operations.
#[derive(Error, Debug)]
pub enum PosterlineError {
    /// Font file could not be read from disk
    #[error("Failed to read font file {path}: {source}")]
    FontLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Font file was read but could not be parsed
    #[error("Invalid font data in {path}: {reason}")]
    InvalidFontData { path: PathBuf, reason: String },

    /// Font is not part of the font set
    #[error("Font not found: {name}")]
    FontNotFound { name: String },

    /// Pixel size cannot be used to instantiate a font
    #[error("Invalid font size {size}")]
    InvalidSize { size: f32 },

    /// Anchor string is not a valid two-letter anchor
    #[error("Invalid anchor '{0}'")]
    InvalidAnchor(String),

    /// Colour string could not be parsed
    #[error("Invalid color '{0}'")]
    InvalidColor(String),

    /// Canvas failed to paint a run
    #[error("Render error: {0}")]
    Render(String),

    /// Layout configuration could not be parsed
    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),

    /// Image encoding failed
    #[error("Image encoding error: {0}")]
    Image(String),
}

impl PosterlineError {
    pub fn font_load(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FontLoad {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_font(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidFontData {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn render(message: impl Into<String>) -> Self {
        Self::Render(message.into())
    }

    pub fn image(message: impl Into<String>) -> Self {
        Self::Image(message.into())
    }
}
