// this_file: crates/posterline-layout/src/line.rs

//! Line painting.

use crate::typesetter::{DrawReport, Paint, Typesetter};
use posterline_core::{Align, Anchor, Canvas, Color, LayoutConfig, Point};
use serde::{Deserialize, Serialize};

/// How a block of text is painted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color,
    /// Two-letter anchor forwarded to the canvas
    #[serde(default)]
    pub anchor: Anchor,
    #[serde(default)]
    pub align: Align,
    /// Extra space between lines on top of the size-derived gap
    #[serde(default)]
    pub spacing: f32,
}

impl TextStyle {
    pub fn new(size: f32, color: Color) -> Self {
        Self {
            size,
            color,
            anchor: Anchor::default(),
            align: Align::default(),
            spacing: 0.0,
        }
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }
}

/// Gap added below each line: `size * 6 / 42`, rounded to one decimal and
/// then truncated to whole pixels.
pub fn line_gap(config: &LayoutConfig, size: f32) -> f32 {
    if config.line_gap_denominator == 0 {
        return 0.0;
    }
    let gap = size * config.line_gap_numerator as f32 / config.line_gap_denominator as f32;
    ((gap * 10.0).round() / 10.0).trunc()
}

impl Typesetter<'_> {
    /// Paint `text` starting at `position`, one line per `\n`.
    ///
    /// Each line starts `size + line_gap(size) + spacing` below the previous
    /// one. Empty lines are not painted but still take their vertical space.
    pub fn draw_line(
        &self,
        canvas: &mut dyn Canvas,
        position: Point,
        text: &str,
        style: &TextStyle,
    ) -> DrawReport {
        let line_height = style.size + line_gap(self.config(), style.size) + style.spacing;
        let paint = Paint {
            size: style.size,
            color: style.color,
            anchor: style.anchor,
            align: style.align,
        };

        let mut report = DrawReport::default();
        for (index, line) in text.split('\n').enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let origin = position.offset(0.0, line_height * index as f32);
            let runs = self.route(line);
            if runs.is_empty() {
                report.lines += 1;
                continue;
            }
            report.absorb(self.paint_runs(canvas, origin, &runs, &paint, "draw_line"));
        }
        report
    }
}
