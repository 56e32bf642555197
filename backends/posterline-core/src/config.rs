// this_file: backends/posterline-core/src/config.rs

//! Tunable constants of the layout engine.

use crate::types::Anchor;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Layout constants shared by the renderer, fitter and packer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Smallest size the heading fitter will shrink to
    pub min_heading_size: u32,
    /// Anchor used when painting a fitted heading
    pub heading_anchor: Anchor,
    /// Extra line gap as `size * numerator / denominator`
    pub line_gap_numerator: u32,
    pub line_gap_denominator: u32,
    /// Horizontal gap between packed columns
    pub column_spacing: u32,
    /// Rows per packed column
    pub max_rows: usize,
    /// Total width available to packed columns
    pub max_columns_width: u32,
    /// Pixel size used when measuring packed items
    pub column_text_size: u32,
    /// Capacity of the run-width cache
    pub measure_cache_size: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_heading_size: 10,
            heading_anchor: Anchor::LEFT_BASELINE,
            line_gap_numerator: 6,
            line_gap_denominator: 42,
            column_spacing: 45,
            max_rows: 5,
            max_columns_width: 1020,
            column_text_size: 35,
            measure_cache_size: 512,
        }
    }
}

impl LayoutConfig {
    /// Parse a (possibly partial) JSON document; missing keys keep defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Constants of the album poster tracklist.
    pub fn tracklist() -> Self {
        Self::default()
    }

    /// Constants scaled for an A4 print poster (2480×3508 instead of 1140×1740).
    pub fn a4() -> Self {
        let base = Self::default();
        let scale = |v: u32| ((v as f32) * A4_SCALE).round() as u32;
        Self {
            column_spacing: scale(base.column_spacing),
            max_columns_width: scale(base.max_columns_width),
            column_text_size: scale(base.column_text_size),
            ..base
        }
    }
}

/// Ratio between the A4 print canvas width and the default poster width.
const A4_SCALE: f32 = 2480.0 / 1140.0;
