// this_file: backends/posterline-skia/src/canvas.rs

//! Raster canvas backed by a tiny-skia pixmap.

use crate::outline::SkiaOutlineBuilder;
use log::{trace, warn};
use posterline_core::{
    Canvas, Color, Face, GlyphId, HorizontalAnchor, PosterlineError, RenderSurface, Result,
    TextDraw, VerticalAnchor,
};
use tiny_skia::{FillRule, FilterQuality, Paint, Pixmap, PixmapPaint, Transform};

/// RGBA raster surface text runs are painted onto.
pub struct PixmapCanvas {
    pixmap: Pixmap,
    anti_alias: bool,
}

impl std::fmt::Debug for PixmapCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixmapCanvas")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .field("anti_alias", &self.anti_alias)
            .finish()
    }
}

/// One glyph of a run after layout, in canvas pixels.
struct PlacedGlyph {
    glyph: GlyphId,
    x: f32,
}

impl PixmapCanvas {
    /// Transparent canvas of `width`×`height` pixels.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height)
            .ok_or_else(|| PosterlineError::render(format!("Cannot allocate {width}x{height} canvas")))?;
        Ok(Self {
            pixmap,
            anti_alias: true,
        })
    }

    pub fn with_background(width: u32, height: u32, background: Color) -> Result<Self> {
        let mut canvas = Self::new(width, height)?;
        canvas.fill(background);
        Ok(canvas)
    }

    pub fn set_anti_alias(&mut self, anti_alias: bool) {
        self.anti_alias = anti_alias;
    }

    pub fn fill(&mut self, color: Color) {
        self.pixmap
            .fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a));
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Straight-alpha colour at (`x`, `y`), `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let pixel = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(pixel.red(), pixel.green(), pixel.blue(), pixel.alpha()))
    }

    pub fn into_surface(self) -> Result<RenderSurface> {
        let width = self.pixmap.width();
        let height = self.pixmap.height();
        RenderSurface::from_rgba(width, height, self.pixmap.take(), true)
    }

    pub fn encode_png(self) -> Result<Vec<u8>> {
        self.into_surface()?.into_png()
    }

    fn paint_outline(&mut self, face: &dyn Face, glyph: GlyphId, scale: f32, x: f32, baseline: f32, paint: &Paint<'_>) {
        let mut builder = SkiaOutlineBuilder::new(scale);
        if face.outline_glyph(glyph, &mut builder).is_none() {
            return;
        }
        if let Some(path) = builder.finish() {
            let transform = Transform::from_translate(x, baseline);
            self.pixmap
                .fill_path(&path, paint, FillRule::Winding, transform, None);
        }
    }

    /// Composite an embedded bitmap glyph; returns false when the face has none.
    fn paint_raster(&mut self, face: &dyn Face, glyph: GlyphId, size: f32, x: f32, baseline: f32) -> bool {
        let pixels_per_em = size.round().clamp(1.0, f32::from(u16::MAX)) as u16;
        let Some(raster) = face.raster_glyph(glyph, pixels_per_em) else {
            return false;
        };
        if raster.pixels_per_em == 0 {
            return false;
        }
        let image = match Pixmap::decode_png(&raster.png) {
            Ok(image) => image,
            Err(err) => {
                warn!(target: "posterline::render", "Undecodable bitmap for glyph {}: {err}", glyph.0);
                return false;
            }
        };

        let scale = size / f32::from(raster.pixels_per_em);
        let left = x + f32::from(raster.x) * scale;
        let top = baseline - (f32::from(raster.y) + image.height() as f32) * scale;
        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };
        let transform = Transform::from_row(scale, 0.0, 0.0, scale, left, top);
        self.pixmap
            .draw_pixmap(0, 0, image.as_ref(), &paint, transform, None);
        true
    }
}

/// Pen offsets of every character of `text`, starting at 0, and the total advance.
fn layout_glyphs(face: &dyn Face, text: &str, scale: f32) -> (Vec<PlacedGlyph>, f32) {
    let mut pen = 0.0;
    let glyphs = text
        .chars()
        .map(|ch| {
            let glyph = face.glyph_index(ch).unwrap_or(GlyphId(0));
            let placed = PlacedGlyph { glyph, x: pen };
            pen += f32::from(face.glyph_advance(glyph).unwrap_or(0)) * scale;
            placed
        })
        .collect();
    (glyphs, pen)
}

/// Ink extent above (`top`) and below (`bottom`) the baseline, in font units.
fn ink_extent(face: &dyn Face, glyphs: &[PlacedGlyph]) -> Option<(i16, i16)> {
    struct Discard;
    impl posterline_core::OutlineBuilder for Discard {
        fn move_to(&mut self, _: f32, _: f32) {}
        fn line_to(&mut self, _: f32, _: f32) {}
        fn quad_to(&mut self, _: f32, _: f32, _: f32, _: f32) {}
        fn curve_to(&mut self, _: f32, _: f32, _: f32, _: f32, _: f32, _: f32) {}
        fn close(&mut self) {}
    }

    glyphs
        .iter()
        .filter_map(|placed| face.outline_glyph(placed.glyph, &mut Discard))
        .map(|rect| (rect.y_max, rect.y_min))
        .reduce(|(top, bottom), (y_max, y_min)| (top.max(y_max), bottom.min(y_min)))
}

/// Baseline y for a run whose anchor point is at `y`.
fn resolve_baseline(face: &dyn Face, glyphs: &[PlacedGlyph], vertical: VerticalAnchor, y: f32, scale: f32) -> f32 {
    let metrics = face.vertical_metrics();
    let ascender = f32::from(metrics.ascender) * scale;
    let descender = f32::from(metrics.descender) * scale;
    match vertical {
        VerticalAnchor::Ascender => y + ascender,
        VerticalAnchor::Middle => y + (ascender + descender) / 2.0,
        VerticalAnchor::Baseline => y,
        VerticalAnchor::Descender => y + descender,
        VerticalAnchor::Top => match ink_extent(face, glyphs) {
            Some((top, _)) => y + f32::from(top) * scale,
            None => y + ascender,
        },
        VerticalAnchor::Bottom => match ink_extent(face, glyphs) {
            Some((_, bottom)) => y + f32::from(bottom) * scale,
            None => y + descender,
        },
    }
}

fn resolve_left(horizontal: HorizontalAnchor, x: f32, advance: f32) -> f32 {
    match horizontal {
        HorizontalAnchor::Left | HorizontalAnchor::Start => x,
        HorizontalAnchor::Middle => x - advance / 2.0,
        HorizontalAnchor::Right => x - advance,
    }
}

impl Canvas for PixmapCanvas {
    /// Paint one run. `align` only affects multi-line blocks, so a single run
    /// ignores it.
    fn draw_text(&mut self, draw: &TextDraw<'_>) -> Result<()> {
        if !draw.size.is_finite() || draw.size <= 0.0 {
            return Err(PosterlineError::InvalidSize { size: draw.size });
        }
        let upem = draw.face.units_per_em();
        if upem == 0 {
            return Err(PosterlineError::render("face reports zero units per em"));
        }
        if draw.text.is_empty() || draw.color.is_transparent() {
            return Ok(());
        }

        let scale = draw.size / f32::from(upem);
        let (glyphs, advance) = layout_glyphs(draw.face, draw.text, scale);
        let left = resolve_left(draw.anchor.horizontal, draw.origin.x, advance);
        let baseline = resolve_baseline(draw.face, &glyphs, draw.anchor.vertical, draw.origin.y, scale);
        trace!(
            target: "posterline::render",
            "draw {:?} size={} anchor={} at ({left:.1}, {baseline:.1})",
            draw.text,
            draw.size,
            draw.anchor
        );

        let mut paint = Paint::default();
        paint.set_color_rgba8(draw.color.r, draw.color.g, draw.color.b, draw.color.a);
        paint.anti_alias = self.anti_alias;

        for placed in &glyphs {
            let x = left + placed.x;
            if !self.paint_raster(draw.face, placed.glyph, draw.size, x, baseline) {
                self.paint_outline(draw.face, placed.glyph, scale, x, baseline, &paint);
            }
        }
        Ok(())
    }
}
