// this_file: crates/posterline-layout/tests/common/mod.rs

#![allow(dead_code)]

use posterline_core::{
    Canvas, Face, GlyphId, OutlineBuilder, Rect, Result, Run, TextDraw, VerticalMetrics, Weight,
};
use posterline_fontdb::FontSet;
use std::sync::Arc;

/// Fixed-advance face with box glyphs for the characters `covers` accepts.
pub struct BlockFace {
    pub advance: u16,
    pub covers: fn(char) -> bool,
}

impl Face for BlockFace {
    fn glyph_index(&self, ch: char) -> Option<GlyphId> {
        (self.covers)(ch).then_some(GlyphId(1))
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

    fn outline_glyph(&self, _glyph: GlyphId, _builder: &mut dyn OutlineBuilder) -> Option<Rect> {
        None
    }
}

pub fn latin(ch: char) -> bool {
    ch.is_ascii() || ('\u{00C0}'..='\u{024F}').contains(&ch)
}

pub fn cjk(ch: char) -> bool {
    ('\u{3000}'..='\u{30FF}').contains(&ch) || ('\u{4E00}'..='\u{9FFF}').contains(&ch)
}

pub fn bengali(ch: char) -> bool {
    ('\u{0980}'..='\u{09FF}').contains(&ch)
}

/// Latin, CJK, Bengali and emoji faces with distinct advances.
pub fn poster_fonts() -> FontSet {
    FontSet::builder(Weight::Bold)
        .face("Oswald", Arc::new(BlockFace { advance: 500, covers: latin }))
        .face("NotoSansJP", Arc::new(BlockFace { advance: 1000, covers: cjk }))
        .face("NotoSansBengali", Arc::new(BlockFace { advance: 700, covers: bengali }))
        .emoji_face("emoji", Arc::new(BlockFace { advance: 1200, covers: posterline_unicode::is_emoji }))
        .build()
}

pub fn latin_cjk() -> FontSet {
    FontSet::builder(Weight::Regular)
        .face("Oswald", Arc::new(BlockFace { advance: 600, covers: latin }))
        .face("NotoSansJP", Arc::new(BlockFace { advance: 1000, covers: cjk }))
        .build()
}

/// `[text]#font` per run.
pub fn describe(runs: &[Run]) -> String {
    runs.iter()
        .map(|run| format!("[{}]{}", run.text, run.font))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Deterministic mixed-script strings for property checks.
pub fn sample_strings(count: usize) -> Vec<String> {
    const PALETTE: &[char] = &[
        'a', 'Z', 'é', ' ', ',', '!', '.', '?', '-', '世', '界', 'の', 'ক', 'া', '🎵', '😀', '🇯',
        '🇵', '\u{200D}', '\u{0301}', '\u{10FFFD}', '\n', 'ß', '"', '\'',
    ];
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    (0..count)
        .map(|i| {
            let len = i % 24;
            (0..len)
                .map(|_| {
                    state ^= state << 13;
                    state ^= state >> 7;
                    state ^= state << 17;
                    PALETTE[(state % PALETTE.len() as u64) as usize]
                })
                .collect()
        })
        .collect()
}

/// Counts draw calls without painting.
#[derive(Default)]
pub struct CountingCanvas {
    pub draws: Vec<(f32, f32, String)>,
}

impl Canvas for CountingCanvas {
    fn draw_text(&mut self, draw: &TextDraw<'_>) -> Result<()> {
        self.draws
            .push((draw.origin.x, draw.origin.y, draw.text.to_string()));
        Ok(())
    }
}
