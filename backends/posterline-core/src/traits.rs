// this_file: backends/posterline-core/src/traits.rs

//! Seams between the layout engine, font data and the host canvas.

use crate::types::{Align, Anchor, Color, Point, RasterGlyph, VerticalMetrics};
use crate::Result;
use ttf_parser::{GlyphId, OutlineBuilder, Rect};

/// A parsed font face.
///
/// Coverage is answered on demand from the face's character map rather than
/// precomputed, since a font set can span several large script families.
pub trait Face: Send + Sync {
    /// Glyph mapped to `ch`, or `None` when the face has no glyph for it.
    fn glyph_index(&self, ch: char) -> Option<GlyphId>;

    fn units_per_em(&self) -> u16;

    /// Horizontal advance of `glyph` in font units.
    fn glyph_advance(&self, glyph: GlyphId) -> Option<u16>;

    fn vertical_metrics(&self) -> VerticalMetrics;

    /// Feed the outline of `glyph` into `builder`, returning its bounds.
    fn outline_glyph(&self, glyph: GlyphId, builder: &mut dyn OutlineBuilder) -> Option<Rect>;

    /// Best embedded bitmap for `glyph` at `pixels_per_em`, if the face has one.
    fn raster_glyph(&self, _glyph: GlyphId, _pixels_per_em: u16) -> Option<RasterGlyph> {
        None
    }

    /// Whether the face has a glyph for `ch`. Never fails: a face that cannot
    /// answer is treated as not covering the character.
    fn covers(&self, ch: char) -> bool {
        self.glyph_index(ch).is_some()
    }
}

/// One run handed to a canvas for painting.
pub struct TextDraw<'a> {
    /// Pen position the anchor is resolved against
    pub origin: Point,
    pub text: &'a str,
    pub face: &'a dyn Face,
    /// Pixel size the face is instantiated at
    pub size: f32,
    pub color: Color,
    pub anchor: Anchor,
    pub align: Align,
}

/// Host drawing surface.
///
/// Anchor and alignment in [`TextDraw`] are resolved here, not by the caller.
pub trait Canvas {
    fn draw_text(&mut self, draw: &TextDraw<'_>) -> Result<()>;
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn draw_text(&mut self, draw: &TextDraw<'_>) -> Result<()> {
        (**self).draw_text(draw)
    }
}
