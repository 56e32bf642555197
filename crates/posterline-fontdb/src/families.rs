// this_file: crates/posterline-fontdb/src/families.rs

//! Bundled font families in priority order.

use posterline_core::Weight;
use std::path::{Path, PathBuf};

/// Directory the bundled families live under, relative to the working directory.
pub const DEFAULT_FONT_DIR: &str = "assets/fonts";

/// Families searched for coverage, first match wins.
///
/// Oswald (Latin display face) comes first so Latin text and universal
/// punctuation default to it; CJK and Bengali fallbacks follow; Noto Sans
/// catches the remaining Latin-extended, Greek and Cyrillic text.
pub const FONT_FAMILIES: &[&str] = &[
    "Oswald",
    "NotoSansJP",
    "NotoSansKR",
    "NotoSansTC",
    "NotoSansSC",
    "NotoSansBengali",
    "NotoSans",
];

/// `<dir>/<family>/<family>-<weight>.ttf`
pub fn family_path(dir: &Path, family: &str, weight: Weight) -> PathBuf {
    dir.join(family).join(format!("{family}-{weight}.ttf"))
}
