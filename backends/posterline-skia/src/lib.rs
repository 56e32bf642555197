// this_file: backends/posterline-skia/src/lib.rs

//! tiny-skia raster backend for posterline.
//!
//! [`PixmapCanvas`] implements [`Canvas`](posterline_core::Canvas): it
//! resolves the two-letter anchor of every run against the face's metrics,
//! fills glyph outlines, and composites embedded colour bitmaps (emoji fonts)
//! scaled to the requested size.

mod canvas;
mod outline;

pub use canvas::PixmapCanvas;
