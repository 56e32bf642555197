// this_file: backends/posterline-skia/src/outline.rs

//! Glyph outlines as tiny-skia paths.

use posterline_core::OutlineBuilder;
use tiny_skia::{Path, PathBuilder};

/// Collects a glyph outline in pixels, flipping font-space y (up) to canvas y (down).
pub(crate) struct SkiaOutlineBuilder {
    builder: PathBuilder,
    scale: f32,
}

impl SkiaOutlineBuilder {
    pub(crate) fn new(scale: f32) -> Self {
        Self {
            builder: PathBuilder::new(),
            scale,
        }
    }

    /// `None` for empty outlines such as the space glyph.
    pub(crate) fn finish(self) -> Option<Path> {
        self.builder.finish()
    }

    fn point(&self, x: f32, y: f32) -> (f32, f32) {
        (x * self.scale, -y * self.scale)
    }
}

impl OutlineBuilder for SkiaOutlineBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.point(x1, y1);
        let (x, y) = self.point(x, y);
        self.builder.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.point(x1, y1);
        let (x2, y2) = self.point(x2, y2);
        let (x, y) = self.point(x, y);
        self.builder.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}
