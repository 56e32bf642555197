// this_file: crates/posterline-layout/src/typesetter.rs

//! Entry point tying a font set, layout constants and a width cache together.

use crate::measure::ScaledFace;
use crate::router;
use log::warn;
use posterline_core::{
    utils::whole_pixels, CacheStats, Canvas, Color, LayoutConfig, MeasureCache, MeasureKey, Point,
    Result, Run, TextDraw,
};
use posterline_core::{Align, Anchor, RouteDiagnostics};
use posterline_fontdb::FontSet;

/// Lays out and paints text with one [`FontSet`].
///
/// Holds the font set by shared reference and never mutates it; the width
/// cache is internally synchronised, so a single typesetter can serve several
/// poster renders on different threads.
pub struct Typesetter<'f> {
    fonts: &'f FontSet,
    config: LayoutConfig,
    cache: MeasureCache,
}

/// Outcome of painting one or more lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawReport {
    /// Advance width of the widest line, in whole pixels
    pub width: u32,
    pub lines: usize,
    pub runs_drawn: usize,
    /// Runs whose font could not be instantiated or painted
    pub runs_skipped: usize,
}

impl DrawReport {
    pub(crate) fn absorb(&mut self, line: DrawReport) {
        self.width = self.width.max(line.width);
        self.lines += line.lines;
        self.runs_drawn += line.runs_drawn;
        self.runs_skipped += line.runs_skipped;
    }
}

/// Paint parameters shared by all runs of one call.
pub(crate) struct Paint {
    pub size: f32,
    pub color: Color,
    pub anchor: Anchor,
    pub align: Align,
}

impl<'f> Typesetter<'f> {
    pub fn new(fonts: &'f FontSet) -> Self {
        Self::with_config(fonts, LayoutConfig::default())
    }

    pub fn with_config(fonts: &'f FontSet, config: LayoutConfig) -> Self {
        let cache = MeasureCache::new(config.measure_cache_size);
        Self {
            fonts,
            config,
            cache,
        }
    }

    pub fn fonts(&self) -> &'f FontSet {
        self.fonts
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn route(&self, text: &str) -> Vec<Run> {
        router::route(text, self.fonts)
    }

    /// Width of `run` at `size`, in whole pixels.
    pub fn run_width(&self, run: &Run, size: f32) -> Result<u32> {
        let scaled = ScaledFace::from_set(self.fonts, run.font, size)?;
        Ok(self.cached_width(&scaled, run))
    }

    /// Sum of the run widths of `runs`; runs that cannot be measured count as 0.
    pub fn measure_runs(&self, runs: &[Run], size: f32) -> u32 {
        runs.iter()
            .map(|run| match self.run_width(run, size) {
                Ok(width) => width,
                Err(err) => {
                    warn!(target: "posterline::render", "Cannot measure {:?} in {}: {err}", run.text, run.font);
                    0
                }
            })
            .sum()
    }

    /// Advance width of `text` at `size`, in whole pixels.
    pub fn measure_width(&self, text: &str, size: f32) -> u32 {
        self.measure_runs(&self.route(text), size)
    }

    fn cached_width(&self, scaled: &ScaledFace<'_>, run: &Run) -> u32 {
        let key = MeasureKey::new(run.font, &run.text, scaled.size());
        whole_pixels(self.cache.get_or_insert_with(key, || scaled.text_width(&run.text)))
    }

    /// Paint `runs` left to right from `origin`, advancing by each run's width.
    pub(crate) fn paint_runs(
        &self,
        canvas: &mut dyn Canvas,
        origin: Point,
        runs: &[Run],
        paint: &Paint,
        operation: &str,
    ) -> DrawReport {
        RouteDiagnostics::new(operation, runs)
            .with_size(paint.size)
            .log();

        let mut report = DrawReport {
            lines: 1,
            ..DrawReport::default()
        };
        let mut cursor = 0u32;
        for run in runs {
            let scaled = match ScaledFace::from_set(self.fonts, run.font, paint.size) {
                Ok(scaled) => scaled,
                Err(err) => {
                    warn!(target: "posterline::render", "Skipping {:?} in {}: {err}", run.text, run.font);
                    report.runs_skipped += 1;
                    continue;
                }
            };
            let width = self.cached_width(&scaled, run);
            let draw = TextDraw {
                origin: origin.offset(cursor as f32, 0.0),
                text: &run.text,
                face: scaled.face(),
                size: paint.size,
                color: paint.color,
                anchor: paint.anchor,
                align: paint.align,
            };
            match canvas.draw_text(&draw) {
                Ok(()) => report.runs_drawn += 1,
                Err(err) => {
                    warn!(target: "posterline::render", "Failed to paint {:?} in {}: {err}", run.text, run.font);
                    report.runs_skipped += 1;
                }
            }
            cursor += width;
        }
        report.width = cursor;
        report
    }
}
