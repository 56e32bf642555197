// this_file: crates/posterline-layout/src/heading.rs

//! Shrink-to-fit headings.

use crate::typesetter::{Paint, Typesetter};
use log::debug;
use posterline_core::{Align, Canvas, Color, Point, Run};

/// Size chosen for a heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingFit {
    pub size: u32,
    /// Advance width at `size`
    pub width: u32,
    /// Number of one-unit size reductions made
    pub iterations: u32,
    /// False when the heading still overflows at the size floor
    pub fits: bool,
}

impl Typesetter<'_> {
    /// Largest size from `start_size` down to the configured floor at which
    /// `text` is at most `max_width` wide, or the floor itself.
    ///
    /// A `start_size` already below the floor is used unchanged.
    pub fn fit_heading(&self, text: &str, max_width: u32, start_size: u32) -> HeadingFit {
        self.fit_runs(&self.route(text), max_width, start_size)
    }

    /// Fit `text` to `max_width` and paint it left to right on its baseline.
    pub fn fit_and_draw(
        &self,
        canvas: &mut dyn Canvas,
        position: Point,
        max_width: u32,
        text: &str,
        color: Color,
        start_size: u32,
    ) -> HeadingFit {
        let runs = self.route(text);
        let fit = self.fit_runs(&runs, max_width, start_size);
        if !runs.is_empty() {
            let paint = Paint {
                size: fit.size as f32,
                color,
                anchor: self.config().heading_anchor,
                align: Align::Left,
            };
            self.paint_runs(canvas, position, &runs, &paint, "fit_and_draw");
        }
        fit
    }

    fn fit_runs(&self, runs: &[Run], max_width: u32, start_size: u32) -> HeadingFit {
        let floor = self.config().min_heading_size;
        let mut size = start_size;
        let mut width = self.measure_runs(runs, size as f32);
        let mut iterations = 0;

        while size > floor && width > max_width {
            size -= 1;
            iterations += 1;
            width = self.measure_runs(runs, size as f32);
        }

        let fits = width <= max_width;
        if !fits {
            debug!(target: "posterline::fit", "Heading overflows by {}px at size {size}", width - max_width);
        }
        debug!(target: "posterline::fit", "start={start_size} size={size} width={width} max={max_width} steps={iterations}");
        HeadingFit {
            size,
            width,
            iterations,
            fits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{latin_cjk, RecordingCanvas};
    use posterline_core::LayoutConfig;

    #[test]
    fn test_short_heading_keeps_start_size() {
        let fonts = latin_cjk();
        let typesetter = Typesetter::new(&fonts);
        let fit = typesetter.fit_heading("Abbey Road", 1760, 160);
        // 10 × 0.6 × 160 = 960
        assert_eq!(fit, HeadingFit { size: 160, width: 960, iterations: 0, fits: true });
    }

    #[test]
    fn test_heading_shrinks_to_largest_fitting_size() {
        let fonts = latin_cjk();
        let typesetter = Typesetter::new(&fonts);
        let title = "x".repeat(20);
        let fit = typesetter.fit_heading(&title, 1760, 160);
        // 12 px per size unit: 146 × 12 = 1752, 147 × 12 = 1764
        assert_eq!(fit.size, 146);
        assert_eq!(fit.width, 1752);
        assert_eq!(fit.iterations, 14);
        assert!(fit.fits);
    }

    #[test]
    fn test_overlong_heading_stops_at_floor() {
        let fonts = latin_cjk();
        let typesetter = Typesetter::new(&fonts);
        let title = "x".repeat(300);
        let fit = typesetter.fit_heading(&title, 1760, 160);
        assert_eq!(fit.size, 10);
        assert_eq!(fit.width, 1800);
        assert_eq!(fit.iterations, 150);
        assert!(!fit.fits);
    }

    #[test]
    fn test_floor_is_configurable() {
        let fonts = latin_cjk();
        let config = LayoutConfig {
            min_heading_size: 40,
            ..LayoutConfig::default()
        };
        let typesetter = Typesetter::with_config(&fonts, config);
        let fit = typesetter.fit_heading(&"x".repeat(300), 1760, 160);
        assert_eq!(fit.size, 40);
    }

    #[test]
    fn test_start_below_floor_is_kept() {
        let fonts = latin_cjk();
        let typesetter = Typesetter::new(&fonts);
        let fit = typesetter.fit_heading(&"x".repeat(300), 10, 8);
        assert_eq!(fit.size, 8);
        assert_eq!(fit.iterations, 0);
    }

    #[test]
    fn test_fit_and_draw_paints_baseline_runs_at_fitted_size() {
        let fonts = latin_cjk();
        let typesetter = Typesetter::new(&fonts);
        let mut canvas = RecordingCanvas::default();

        let fit = typesetter.fit_and_draw(&mut canvas, Point::new(50.0, 1400.0), 300, "Tokyo 東京", Color::BLACK, 160);

        // "Tokyo " is 3.6 px and "東京" 2 px per size unit: 190 + 106 at 53, 194 + 108 at 54
        assert_eq!(fit.size, 53);
        assert_eq!(canvas.calls.len(), 2);
        assert!(canvas.calls.iter().all(|call| call.size == 53.0 && call.anchor == "ls"));
        assert_eq!(canvas.calls[1].origin.x, 50.0 + 190.0);
    }

    #[test]
    fn test_empty_heading_draws_nothing() {
        let fonts = latin_cjk();
        let typesetter = Typesetter::new(&fonts);
        let mut canvas = RecordingCanvas::default();
        let fit = typesetter.fit_and_draw(&mut canvas, Point::new(0.0, 0.0), 100, "", Color::BLACK, 60);
        assert!(canvas.calls.is_empty());
        assert_eq!(fit.size, 60);
        assert!(fit.fits);
    }
}
