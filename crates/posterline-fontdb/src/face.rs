// this_file: crates/posterline-fontdb/src/face.rs

//! TrueType/OpenType faces backed by owned font bytes.

use owned_ttf_parser::{AsFaceRef, OwnedFace, RasterImageFormat};
use posterline_core::{
    Face, GlyphId, OutlineBuilder, PosterlineError, RasterGlyph, Rect, Result, VerticalMetrics,
};
use std::path::Path;

/// A parsed font file.
pub struct TtfFace {
    face: OwnedFace,
}

impl std::fmt::Debug for TtfFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtfFace")
            .field("units_per_em", &self.units_per_em())
            .field("glyphs", &self.face.as_face_ref().number_of_glyphs())
            .finish()
    }
}

impl TtfFace {
    /// Read and parse the first face of the file at `path`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = std::fs::read(path).map_err(|e| PosterlineError::font_load(path, e))?;
        Self::from_vec(data, 0).map_err(|e| match e {
            PosterlineError::InvalidFontData { reason, .. } => {
                PosterlineError::invalid_font(path, reason)
            }
            other => other,
        })
    }

    /// Parse face `index` of in-memory font data (`.ttc` collections hold several).
    pub fn from_vec(data: Vec<u8>, index: u32) -> Result<Self> {
        let face = OwnedFace::from_vec(data, index)
            .map_err(|e| PosterlineError::invalid_font("<memory>", e.to_string()))?;
        Ok(Self { face })
    }
}

impl Face for TtfFace {
    fn glyph_index(&self, ch: char) -> Option<GlyphId> {
        self.face.as_face_ref().glyph_index(ch)
    }

    fn units_per_em(&self) -> u16 {
        self.face.as_face_ref().units_per_em()
    }

    fn glyph_advance(&self, glyph: GlyphId) -> Option<u16> {
        self.face.as_face_ref().glyph_hor_advance(glyph)
    }

    fn vertical_metrics(&self) -> VerticalMetrics {
        let face = self.face.as_face_ref();
        VerticalMetrics {
            ascender: face.ascender(),
            descender: face.descender(),
            line_gap: face.line_gap(),
        }
    }

    fn outline_glyph(&self, glyph: GlyphId, builder: &mut dyn OutlineBuilder) -> Option<Rect> {
        self.face.as_face_ref().outline_glyph(glyph, builder)
    }

    fn raster_glyph(&self, glyph: GlyphId, pixels_per_em: u16) -> Option<RasterGlyph> {
        let image = self
            .face
            .as_face_ref()
            .glyph_raster_image(glyph, pixels_per_em)?;
        if image.format != RasterImageFormat::PNG {
            return None;
        }
        Some(RasterGlyph {
            x: image.x,
            y: image.y,
            width: image.width,
            height: image.height,
            pixels_per_em: image.pixels_per_em,
            png: image.data.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// A Latin system font, if this machine has one.
    fn system_font() -> Option<PathBuf> {
        [
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
            "/System/Library/Fonts/Supplemental/Arial.ttf",
            "/Library/Fonts/Arial.ttf",
            "C:\\Windows\\Fonts\\arial.ttf",
        ]
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
    }

    #[test]
    fn test_system_font_parses_and_maps_latin() {
        let Some(path) = system_font() else {
            eprintln!("no system font found, skipping");
            return;
        };
        let face = TtfFace::from_path(&path).unwrap();

        assert!(face.units_per_em() > 0);
        assert!(face.covers('A'));
        assert!(face.covers('z'));
        // plane 16 private use
        assert!(!face.covers('\u{10FFFD}'));

        let glyph = face.glyph_index('A').unwrap();
        assert_ne!(glyph, GlyphId(0));
        assert!(face.glyph_advance(glyph).unwrap() > 0);
        assert!(face.vertical_metrics().ascender > 0);
        assert!(face.vertical_metrics().descender < 0);
    }

    #[test]
    fn test_system_font_outlines_letters() {
        struct Count(usize);
        impl OutlineBuilder for Count {
            fn move_to(&mut self, _: f32, _: f32) {
                self.0 += 1;
            }
            fn line_to(&mut self, _: f32, _: f32) {
                self.0 += 1;
            }
            fn quad_to(&mut self, _: f32, _: f32, _: f32, _: f32) {
                self.0 += 1;
            }
            fn curve_to(&mut self, _: f32, _: f32, _: f32, _: f32, _: f32, _: f32) {
                self.0 += 1;
            }
            fn close(&mut self) {}
        }

        let Some(path) = system_font() else {
            eprintln!("no system font found, skipping");
            return;
        };
        let data = std::fs::read(&path).unwrap();
        let face = TtfFace::from_vec(data, 0).unwrap();
        let mut count = Count(0);

        let bbox = face.outline_glyph(face.glyph_index('O').unwrap(), &mut count).unwrap();
        assert!(count.0 > 0);
        assert!(bbox.width() > 0);
        let space = face.glyph_index(' ').unwrap();
        assert!(face.outline_glyph(space, &mut Count(0)).is_none());
    }

    #[test]
    fn test_garbage_bytes_are_rejected() {
        let err = TtfFace::from_vec(b"definitely not a font".to_vec(), 0).unwrap_err();
        assert!(matches!(err, PosterlineError::InvalidFontData { .. }));
    }

    #[test]
    fn test_missing_file_is_a_load_error() {
        let err = TtfFace::from_path(Path::new("/nonexistent/Oswald-Bold.ttf")).unwrap_err();
        assert!(matches!(err, PosterlineError::FontLoad { .. }));
    }

    #[test]
    fn test_invalid_file_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"nope").unwrap();
        let err = TtfFace::from_path(&path).unwrap_err();
        assert!(err.to_string().contains("broken.ttf"));
    }
}
