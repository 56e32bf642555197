// this_file: crates/posterline-layout/src/lib.rs

//! Mixed-script poster text layout.
//!
//! Routes each character of a string to a font of a [`FontSet`], measures
//! the resulting runs from glyph advances, and paints them onto a host
//! [`Canvas`](posterline_core::Canvas). On top of that sit a shrink-to-fit
//! heading search and a width-budgeted column packer for tracklists.
//!
//! [`FontSet`]: posterline_fontdb::FontSet

pub mod columns;
pub mod heading;
pub mod line;
pub mod measure;
pub mod router;
mod typesetter;

#[cfg(test)]
mod test_support;

pub use columns::ColumnLayout;
pub use heading::HeadingFit;
pub use line::{line_gap, TextStyle};
pub use measure::{run_width, ScaledFace};
pub use router::{assign, merge_runs, route};
pub use typesetter::{DrawReport, Typesetter};
