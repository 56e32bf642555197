// this_file: crates/posterline-layout/src/test_support.rs

//! In-memory faces and a recording canvas for unit tests.

use posterline_core::{
    Canvas, Color, Face, GlyphId, OutlineBuilder, Point, Rect, Result, Run, TextDraw,
    VerticalMetrics, Weight,
};
use posterline_fontdb::FontSet;
use std::sync::Arc;

/// Monospaced face covering whatever `covers` accepts; every glyph is a box.
pub struct BlockFace {
    pub advance: u16,
    pub covers: fn(char) -> bool,
}

impl Face for BlockFace {
    fn glyph_index(&self, ch: char) -> Option<GlyphId> {
        (self.covers)(ch).then(|| GlyphId((ch as u32 % 0xFFFF) as u16 + 1))
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

    fn outline_glyph(&self, _glyph: GlyphId, builder: &mut dyn OutlineBuilder) -> Option<Rect> {
        builder.move_to(0.0, 0.0);
        builder.line_to(self.advance as f32, 0.0);
        builder.line_to(self.advance as f32, 700.0);
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

pub fn latin(ch: char) -> bool {
    ch.is_ascii() || matches!(ch, 'À'..='ɏ')
}

pub fn cjk(ch: char) -> bool {
    matches!(ch, '\u{3000}'..='\u{30FF}' | '\u{4E00}'..='\u{9FFF}' | '\u{FF00}'..='\u{FFEF}')
}

pub fn emoji(ch: char) -> bool {
    posterline_unicode::is_emoji(ch)
}

/// Latin (advance 600) then CJK (advance 1000).
pub fn latin_cjk() -> FontSet {
    FontSet::builder(Weight::Regular)
        .face("latin", Arc::new(BlockFace { advance: 600, covers: latin }))
        .face("cjk", Arc::new(BlockFace { advance: 1000, covers: cjk }))
        .build()
}

/// Latin, CJK and a 1200-unit emoji face.
pub fn with_emoji() -> FontSet {
    FontSet::builder(Weight::Regular)
        .face("latin", Arc::new(BlockFace { advance: 600, covers: latin }))
        .face("cjk", Arc::new(BlockFace { advance: 1000, covers: cjk }))
        .emoji_face("emoji", Arc::new(BlockFace { advance: 1200, covers: emoji }))
        .build()
}

pub fn runs(parts: &[(&str, usize)]) -> Vec<Run> {
    parts.iter()
        .map(|&(text, font)| Run::new(text, posterline_core::FontId(font)))
        .collect()
}

/// One recorded [`Canvas::draw_text`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub origin: Point,
    pub text: String,
    pub size: f32,
    pub color: Color,
    pub anchor: String,
}

#[derive(Default)]
pub struct RecordingCanvas {
    pub calls: Vec<Recorded>,
    /// Reject draws whose text contains this character
    pub fail_on: Option<char>,
}

impl Canvas for RecordingCanvas {
    fn draw_text(&mut self, draw: &TextDraw<'_>) -> Result<()> {
        if let Some(ch) = self.fail_on {
            if draw.text.contains(ch) {
                return Err(posterline_core::PosterlineError::render("rejected"));
            }
        }
        self.calls.push(Recorded {
            origin: draw.origin,
            text: draw.text.to_string(),
            size: draw.size,
            color: draw.color,
            anchor: draw.anchor.to_string(),
        });
        Ok(())
    }
}
