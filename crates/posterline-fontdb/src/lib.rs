// this_file: crates/posterline-fontdb/src/lib.rs

//! Font loading for posterline.
//!
//! Reads the bundled script families for one weight into an ordered
//! [`FontSet`], appends a platform colour-emoji font when one is installed,
//! and answers per-character coverage queries through the [`Face`] trait.
//!
//! [`Face`]: posterline_core::Face

mod emoji;
mod face;
mod families;
mod set;

pub use emoji::{emoji_font_candidates, find_emoji_font};
pub use face::TtfFace;
pub use families::{family_path, DEFAULT_FONT_DIR, FONT_FAMILIES};
pub use set::{EmojiSource, FontResource, FontSet, FontSetBuilder, FontSetOptions, ResourceKind};
