// this_file: src/lib.rs

//! Mixed-script text layout and fitting for fixed-layout raster posters.
//!
//! ```no_run
//! use posterline::{Color, FontSet, PixmapCanvas, Point, TextStyle, Typesetter, Weight};
//!
//! let fonts = FontSet::load(Weight::Bold);
//! let typesetter = Typesetter::new(&fonts);
//! let mut canvas = PixmapCanvas::with_background(1240, 1748, Color::WHITE)?;
//!
//! typesetter.fit_and_draw(&mut canvas, Point::new(50.0, 1460.0), 1100, "Abbey Road", Color::BLACK, 160);
//! typesetter.draw_line(
//!     &mut canvas,
//!     Point::new(50.0, 1500.0),
//!     "The Beatles\n1969",
//!     &TextStyle::new(48.0, Color::BLACK),
//! );
//! let layout = typesetter.pack_tracklist(&["Come Together", "Something"], true);
//! assert_eq!(layout.columns.len(), 1);
//!
//! let png = canvas.encode_png()?;
//! # Ok::<(), posterline::PosterlineError>(())
//! ```

pub use posterline_core::{
    Align, Anchor, CacheStats, Canvas, Color, Face, FontId, GlyphId, HorizontalAnchor,
    LayoutConfig, OutlineBuilder, Point, PosterlineError, RasterGlyph, Rect, RenderSurface,
    Result, Run, TextDraw, VerticalAnchor, VerticalMetrics, Weight,
};
pub use posterline_fontdb::{
    EmojiSource, FontResource, FontSet, FontSetBuilder, FontSetOptions, ResourceKind, TtfFace,
};
pub use posterline_layout::{
    assign, line_gap, merge_runs, route, ColumnLayout, DrawReport, HeadingFit, TextStyle,
    Typesetter,
};
pub use posterline_skia::PixmapCanvas;

/// Character classification used by the router.
pub mod unicode {
    pub use posterline_unicode::{classify, is_emoji, is_universal, CharClass, UNIVERSAL_CHARS};
}
