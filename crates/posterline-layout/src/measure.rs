// this_file: crates/posterline-layout/src/measure.rs

//! Advance-width measurement without a shaping engine.
//!
//! A run is as wide as the sum of its characters' horizontal advances at the
//! requested pixel size. Characters the face has no glyph for use the advance
//! of glyph 0 (`.notdef`), which is what gets painted for them.

use posterline_core::{Face, FontId, GlyphId, PosterlineError, Result, Run};
use posterline_fontdb::FontSet;

/// A face instantiated at a pixel size.
#[derive(Clone, Copy)]
pub struct ScaledFace<'a> {
    face: &'a dyn Face,
    size: f32,
    upem: f32,
}

impl<'a> ScaledFace<'a> {
    pub fn new(face: &'a dyn Face, size: f32) -> Result<Self> {
        if !size.is_finite() || size <= 0.0 {
            return Err(PosterlineError::InvalidSize { size });
        }
        let upem = face.units_per_em();
        if upem == 0 {
            return Err(PosterlineError::render("face reports zero units per em"));
        }
        Ok(Self {
            face,
            size,
            upem: f32::from(upem),
        })
    }

    /// Resolve `font` in `fonts` and instantiate it.
    pub fn from_set(fonts: &'a FontSet, font: FontId, size: f32) -> Result<Self> {
        let resource = fonts.get(font).ok_or_else(|| PosterlineError::FontNotFound {
            name: font.to_string(),
        })?;
        Self::new(resource.face(), size)
    }

    pub fn face(&self) -> &'a dyn Face {
        self.face
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Font units to pixels.
    pub fn scale(&self) -> f32 {
        self.size / self.upem
    }

    /// Advance of `ch` in font units.
    pub fn advance_units(&self, ch: char) -> u32 {
        let glyph = self.face.glyph_index(ch).unwrap_or(GlyphId(0));
        u32::from(self.face.glyph_advance(glyph).unwrap_or(0))
    }

    pub fn advance(&self, ch: char) -> f32 {
        self.units_to_pixels(u64::from(self.advance_units(ch)))
    }

    /// Units are summed before scaling so a run is rounded once.
    pub fn text_width(&self, text: &str) -> f32 {
        let units: u64 = text.chars().map(|ch| u64::from(self.advance_units(ch))).sum();
        self.units_to_pixels(units)
    }

    fn units_to_pixels(&self, units: u64) -> f32 {
        (units as f64 * f64::from(self.size) / f64::from(self.upem)) as f32
    }
}

/// Width of one run in pixels.
pub fn run_width(fonts: &FontSet, run: &Run, size: f32) -> Result<f32> {
    Ok(ScaledFace::from_set(fonts, run.font, size)?.text_width(&run.text))
}
