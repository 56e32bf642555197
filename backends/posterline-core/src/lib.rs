// this_file: backends/posterline-core/src/lib.rs

//! Core traits and types for the posterline text layout engine.

pub mod cache;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod surface;
pub mod traits;
pub mod types;
pub mod utils;

pub use cache::{CacheStats, MeasureCache, MeasureKey};
pub use config::LayoutConfig;
pub use diagnostics::RouteDiagnostics;
pub use error::PosterlineError;
pub use surface::RenderSurface;
pub use traits::{Canvas, Face, TextDraw};
pub use types::{
    Align, Anchor, Color, FontId, HorizontalAnchor, Point, RasterGlyph, Run,
    VerticalAnchor, VerticalMetrics, Weight,
};

pub use ttf_parser::{GlyphId, OutlineBuilder, Rect};

/// Result type for posterline operations
pub type Result<T> = std::result::Result<T, PosterlineError>;
