// this_file: tests/common/mod.rs

#![allow(dead_code)]

use posterline::{Face, FontSet, GlyphId, OutlineBuilder, Rect, VerticalMetrics, Weight};
use std::sync::Arc;

/// Face whose covered glyphs are solid boxes `advance` wide and 700 units tall.
pub struct BoxFace {
    pub advance: u16,
    pub covers: fn(char) -> bool,
}

impl Face for BoxFace {
    fn glyph_index(&self, ch: char) -> Option<GlyphId> {
        (self.covers)(ch).then_some(GlyphId(if ch == ' ' { 2 } else { 1 }))
    }

    fn units_per_em(&self) -> u16 {
        1000
    }

    fn glyph_advance(&self, _glyph: GlyphId) -> Option<u16> {
        Some(self.advance)
    }

    fn vertical_metrics(&self) -> VerticalMetrics {
        VerticalMetrics {
            ascender: 800,
            descender: -200,
            line_gap: 0,
        }
    }

    fn outline_glyph(&self, glyph: GlyphId, builder: &mut dyn OutlineBuilder) -> Option<Rect> {
        if glyph.0 != 1 {
            return None;
        }
        let width = f32::from(self.advance);
        builder.move_to(0.0, 0.0);
        builder.line_to(width, 0.0);
        builder.line_to(width, 700.0);
        builder.line_to(0.0, 700.0);
        builder.close();
        Some(Rect {
            x_min: 0,
            y_min: 0,
            x_max: self.advance as i16,
            y_max: 700,
        })
    }
}

/// Latin boxes 500 units wide, CJK boxes 1000 units wide.
pub fn poster_fonts() -> FontSet {
    FontSet::builder(Weight::Regular)
        .face("Oswald", Arc::new(BoxFace { advance: 500, covers: |ch| ch.is_ascii() }))
        .face(
            "NotoSansJP",
            Arc::new(BoxFace {
                advance: 1000,
                covers: |ch| ('\u{3000}'..='\u{9FFF}').contains(&ch),
            }),
        )
        .build()
}

/// Count of pixels in column `x` that are not transparent.
pub fn inked_rows(canvas: &posterline::PixmapCanvas, x: u32) -> usize {
    (0..canvas.height())
        .filter(|&y| canvas.pixel(x, y).is_some_and(|pixel| pixel.a > 0))
        .count()
}
