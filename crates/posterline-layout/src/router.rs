// this_file: crates/posterline-layout/src/router.rs

//! Per-character font routing.
//!
//! Each character goes to the first font of the set that has a glyph for it,
//! with two overrides: universal punctuation and space stay in the font of the
//! preceding character, and emoji go to the emoji font when the set has one.
//! A character nothing covers also stays in the previous font, so routing
//! always produces an assignment. Consecutive characters in the same font are
//! then merged into maximal [`Run`]s.

use log::warn;
use posterline_core::{FontId, Run};
use posterline_fontdb::FontSet;
use posterline_unicode::{classify, CharClass};

/// Font chosen for every character of `text`, in order.
///
/// Returns an empty list when `fonts` is empty, since there is nothing to
/// assign to.
pub fn assign(text: &str, fonts: &FontSet) -> Vec<(char, FontId)> {
    let Some(mut last_font) = fonts.default_font() else {
        if !text.is_empty() {
            warn!(target: "posterline::route", "Empty font set; {} chars unassigned", text.chars().count());
        }
        return Vec::new();
    };

    text.chars()
        .map(|ch| {
            let font = match (classify(ch), fonts.emoji_font()) {
                (CharClass::Universal, _) => last_font,
                (CharClass::Emoji, Some(emoji)) => emoji,
                _ => fonts.first_covering(ch).unwrap_or(last_font),
            };
            last_font = font;
            (ch, font)
        })
        .collect()
}

/// Split `text` into maximal single-font runs.
pub fn route(text: &str, fonts: &FontSet) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for (ch, font) in assign(text, fonts) {
        match runs.last_mut() {
            Some(run) if run.font == font => run.text.push(ch),
            _ => runs.push(Run::new(ch.to_string(), font)),
        }
    }
    runs
}

/// Join adjacent runs that share a font and drop empty ones.
///
/// Idempotent: merging an already merged sequence returns it unchanged.
pub fn merge_runs(runs: impl IntoIterator<Item = Run>) -> Vec<Run> {
    let mut merged: Vec<Run> = Vec::new();
    for run in runs {
        if run.text.is_empty() {
            continue;
        }
        match merged.last_mut() {
            Some(last) if last.font == run.font => last.text.push_str(&run.text),
            _ => merged.push(run),
        }
    }
    merged
}
