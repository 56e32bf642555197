// this_file: crates/posterline-unicode/src/lib.rs

//! Character classes that override coverage-based font routing.
//!
//! Two kinds of characters skip the ordinary "first font that covers it"
//! search: universal punctuation, which follows whatever font the surrounding
//! text uses, and emoji, which go to the emoji font when one is loaded.

use icu_properties::{maps, GeneralCategory};

/// Punctuation and space rendered in the font of the preceding text.
pub const UNIVERSAL_CHARS: &str = " ,!@#$%^&*(){}[]+_=-\"'?";

/// Blocks whose every assigned code point is treated as emoji.
const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x200D, 0x200D),   // zero width joiner
    (0x20E3, 0x20E3),   // combining enclosing keycap
    (0xFE0F, 0xFE0F),   // emoji presentation selector
    (0x1F004, 0x1F004), // mahjong red dragon
    (0x1F0CF, 0x1F0CF), // playing card black joker
    (0x1F170, 0x1F251), // enclosed alphanumeric / ideographic supplement
    (0x1F300, 0x1F5FF), // misc symbols and pictographs (incl. skin tones)
    (0x1F600, 0x1F64F), // emoticons
    (0x1F680, 0x1F6FF), // transport and map symbols
    (0x1F7E0, 0x1F7EB), // geometric shapes extended, coloured circles/squares
    (0x1F900, 0x1F9FF), // supplemental symbols and pictographs
    (0x1FA70, 0x1FAFF), // symbols and pictographs extended-A
];

/// Regional indicator letters; pairs of these form flags.
const REGIONAL_INDICATORS: (u32, u32) = (0x1F1E6, 0x1F1FF);

/// BMP symbol blocks that mix emoji with ordinary punctuation and digits.
/// Only their `So` (other symbol) members count as emoji.
const SYMBOL_RANGES: &[(u32, u32)] = &[
    (0x2300, 0x23FF), // misc technical (watch, hourglass)
    (0x2600, 0x26FF), // misc symbols
    (0x2700, 0x27BF), // dingbats
    (0x2B00, 0x2BFF), // misc symbols and arrows (star, circles)
];

/// Routing class of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Stays in the font of the preceding character
    Universal,
    /// Routed to the emoji font when present
    Emoji,
    /// Routed by coverage
    Text,
}

pub fn classify(ch: char) -> CharClass {
    if is_universal(ch) {
        CharClass::Universal
    } else if is_emoji(ch) {
        CharClass::Emoji
    } else {
        CharClass::Text
    }
}

pub fn is_universal(ch: char) -> bool {
    UNIVERSAL_CHARS.contains(ch)
}

pub fn is_regional_indicator(ch: char) -> bool {
    in_range(ch as u32, REGIONAL_INDICATORS)
}

/// Fixed allowlist of emoji code points; not the full Unicode emoji property.
pub fn is_emoji(ch: char) -> bool {
    let cp = ch as u32;
    if is_regional_indicator(ch) || in_ranges(cp, EMOJI_RANGES) {
        return true;
    }
    in_ranges(cp, SYMBOL_RANGES)
        && maps::general_category().get(ch) == GeneralCategory::OtherSymbol
}

fn in_range(cp: u32, (start, end): (u32, u32)) -> bool {
    (start..=end).contains(&cp)
}

fn in_ranges(cp: u32, ranges: &[(u32, u32)]) -> bool {
    ranges
        .binary_search_by(|&(start, end)| {
            if cp < start {
                std::cmp::Ordering::Greater
            } else if cp > end {
                std::cmp::Ordering::Less
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_universal_set() {
        for ch in " ,!?()[]{}\"'-_=+@#$%^&*".chars() {
            assert!(is_universal(ch), "{ch:?} should be universal");
        }
        assert!(!is_universal('.'));
        assert!(!is_universal(':'));
        assert!(!is_universal('A'));
        assert!(!is_universal('、'));
    }

    #[test]
    fn test_pictographs_are_emoji() {
        for ch in ['😀', '🎵', '🚀', '🤖', '🫠', '🇺', '\u{1F3FD}'] {
            assert!(is_emoji(ch), "{ch:?} should be emoji");
        }
    }

    #[test]
    fn test_symbol_blocks_need_other_symbol_category() {
        assert!(is_emoji('☀'));
        assert!(is_emoji('❤'));
        assert!(is_emoji('⭐'));
        // Dingbat parentheses and circled digits share the block but are not So.
        assert!(!is_emoji('\u{2768}'));
        assert!(!is_emoji('\u{2776}'));
    }

    #[test]
    fn test_text_is_not_emoji() {
        for ch in ['A', 'é', '世', 'ক', '→', '1'] {
            assert!(!is_emoji(ch), "{ch:?} should not be emoji");
        }
    }

    #[test]
    fn test_classify_prefers_universal() {
        assert_eq!(classify(' '), CharClass::Universal);
        assert_eq!(classify('🎧'), CharClass::Emoji);
        assert_eq!(classify('k'), CharClass::Text);
    }

    #[test]
    fn test_ranges_are_sorted_and_disjoint() {
        for ranges in [EMOJI_RANGES, SYMBOL_RANGES] {
            for pair in ranges.windows(2) {
                assert!(pair[0].1 < pair[1].0, "{pair:?} overlap or unsorted");
            }
        }
    }
}
