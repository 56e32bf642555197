// this_file: crates/posterline-fontdb/src/emoji.rs

//! Discovery of a platform colour-emoji font.

use once_cell::sync::Lazy;
use std::path::{Path, PathBuf};

#[cfg(target_os = "macos")]
const EMOJI_FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Apple Color Emoji.ttc",
    "~/Library/Fonts/NotoColorEmoji.ttf",
];

#[cfg(target_os = "windows")]
const EMOJI_FONT_CANDIDATES: &[&str] = &["C:\\Windows\\Fonts\\seguiemj.ttf"];

#[cfg(target_os = "linux")]
const EMOJI_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/noto/NotoColorEmoji.ttf",
    "/usr/share/fonts/noto/NotoColorEmoji.ttf",
    "/usr/share/fonts/google-noto-emoji/NotoColorEmoji.ttf",
    "/usr/share/fonts/noto-emoji/NotoColorEmoji.ttf",
    "/usr/local/share/fonts/NotoColorEmoji.ttf",
    "~/.local/share/fonts/NotoColorEmoji.ttf",
    "~/.fonts/NotoColorEmoji.ttf",
];

#[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
const EMOJI_FONT_CANDIDATES: &[&str] = &[];

static EXPANDED_CANDIDATES: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    EMOJI_FONT_CANDIDATES
        .iter()
        .map(|candidate| PathBuf::from(shellexpand::tilde(candidate).as_ref()))
        .collect()
});

/// Candidate emoji font paths for this platform, `~` expanded, in search order.
pub fn emoji_font_candidates() -> &'static [PathBuf] {
    &EXPANDED_CANDIDATES
}

/// First candidate that exists on disk.
pub fn find_emoji_font() -> Option<&'static Path> {
    first_existing(emoji_font_candidates())
}

pub fn first_existing(candidates: &[PathBuf]) -> Option<&Path> {
    candidates
        .iter()
        .map(PathBuf::as_path)
        .find(|path| path.is_file())
}
