// this_file: backends/posterline-core/src/utils.rs

//! Utility functions for the posterline engine.

use crate::types::Color;
use crate::{PosterlineError, Result};

/// Quantize font size for cache key generation
pub fn quantize_size(size: f32) -> u32 {
    (size * 100.0) as u32
}

/// Truncate a measured width to whole pixels, the way widths are reported.
pub fn whole_pixels(width: f32) -> u32 {
    if width.is_finite() && width > 0.0 {
        width as u32
    } else {
        0
    }
}

/// Parse `#rrggbb`, `#rrggbbaa` or `transparent`.
pub fn parse_color(color: &str) -> Result<Color> {
    let invalid = || PosterlineError::InvalidColor(color.to_string());

    if color == "transparent" {
        return Ok(Color::TRANSPARENT);
    }

    let hex = color.strip_prefix('#').ok_or_else(invalid)?;
    if !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
    };

    match hex.len() {
        6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        8 => Ok(Color::rgba(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        )),
        _ => Err(invalid()),
    }
}
