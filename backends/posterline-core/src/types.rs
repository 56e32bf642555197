// this_file: backends/posterline-core/src/types.rs

//! Core types used throughout the posterline engine.

use crate::{PosterlineError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Weight variant a font set is loaded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weight {
    Regular,
    Bold,
    Light,
}

impl Weight {
    pub const ALL: [Weight; 3] = [Weight::Regular, Weight::Bold, Weight::Light];

    /// File-name suffix used by the bundled font families (`Oswald-Bold.ttf`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Weight::Regular => "Regular",
            Weight::Bold => "Bold",
            Weight::Light => "Light",
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of a font resource inside its font set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FontId(pub usize);

impl FontId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for FontId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Straight (non-premultiplied) RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl FromStr for Color {
    type Err = PosterlineError;

    fn from_str(s: &str) -> Result<Self> {
        crate::utils::parse_color(s)
    }
}

/// Canvas position in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x as f32, y as f32)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// Horizontal half of a text anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizontalAnchor {
    /// `l`: origin at the left edge of the text
    Left,
    /// `m`: origin at the horizontal middle
    Middle,
    /// `r`: origin at the right edge
    Right,
    /// `s`: origin at the start of the text (left for horizontal text)
    Start,
}

/// Vertical half of a text anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalAnchor {
    /// `a`: origin at the ascender line
    Ascender,
    /// `t`: origin at the top of the text
    Top,
    /// `m`: origin half way between ascender and descender
    Middle,
    /// `s`: origin on the baseline
    Baseline,
    /// `b`: origin at the bottom of the text
    Bottom,
    /// `d`: origin at the descender line
    Descender,
}

/// Two-letter text anchor (`"la"`, `"ls"`, `"rt"`, ...).
///
/// The layout engine never interprets an anchor; it is handed to the canvas
/// unchanged with every run it paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Anchor {
    pub horizontal: HorizontalAnchor,
    pub vertical: VerticalAnchor,
}

impl Anchor {
    pub const LEFT_ASCENDER: Anchor = Anchor::new(HorizontalAnchor::Left, VerticalAnchor::Ascender);
    pub const LEFT_BASELINE: Anchor = Anchor::new(HorizontalAnchor::Left, VerticalAnchor::Baseline);
    pub const LEFT_TOP: Anchor = Anchor::new(HorizontalAnchor::Left, VerticalAnchor::Top);
    pub const RIGHT_BASELINE: Anchor =
        Anchor::new(HorizontalAnchor::Right, VerticalAnchor::Baseline);
    pub const RIGHT_TOP: Anchor = Anchor::new(HorizontalAnchor::Right, VerticalAnchor::Top);

    pub const fn new(horizontal: HorizontalAnchor, vertical: VerticalAnchor) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

impl Default for Anchor {
    fn default() -> Self {
        Anchor::LEFT_ASCENDER
    }
}

impl FromStr for Anchor {
    type Err = PosterlineError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        let (Some(h), Some(v), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(PosterlineError::InvalidAnchor(s.to_string()));
        };
        let horizontal = match h {
            'l' => HorizontalAnchor::Left,
            'm' => HorizontalAnchor::Middle,
            'r' => HorizontalAnchor::Right,
            's' => HorizontalAnchor::Start,
            _ => return Err(PosterlineError::InvalidAnchor(s.to_string())),
        };
        let vertical = match v {
            'a' => VerticalAnchor::Ascender,
            't' => VerticalAnchor::Top,
            'm' => VerticalAnchor::Middle,
            's' => VerticalAnchor::Baseline,
            'b' => VerticalAnchor::Bottom,
            'd' => VerticalAnchor::Descender,
            _ => return Err(PosterlineError::InvalidAnchor(s.to_string())),
        };
        Ok(Anchor::new(horizontal, vertical))
    }
}

impl TryFrom<String> for Anchor {
    type Error = PosterlineError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Anchor> for String {
    fn from(anchor: Anchor) -> Self {
        anchor.to_string()
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = match self.horizontal {
            HorizontalAnchor::Left => 'l',
            HorizontalAnchor::Middle => 'm',
            HorizontalAnchor::Right => 'r',
            HorizontalAnchor::Start => 's',
        };
        let v = match self.vertical {
            VerticalAnchor::Ascender => 'a',
            VerticalAnchor::Top => 't',
            VerticalAnchor::Middle => 'm',
            VerticalAnchor::Baseline => 's',
            VerticalAnchor::Bottom => 'b',
            VerticalAnchor::Descender => 'd',
        };
        write!(f, "{h}{v}")
    }
}

/// Multi-line alignment hint, forwarded to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Maximal substring assigned to one font resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Run {
    /// The text content
    pub text: String,
    /// Font chosen for every character of `text`
    pub font: FontId,
}

impl Run {
    pub fn new(text: impl Into<String>, font: FontId) -> Self {
        Self {
            text: text.into(),
            font,
        }
    }
}

/// Vertical face metrics in font units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VerticalMetrics {
    pub ascender: i16,
    pub descender: i16,
    pub line_gap: i16,
}

/// Embedded bitmap glyph (colour emoji fonts ship these instead of outlines).
#[derive(Debug, Clone)]
pub struct RasterGlyph {
    /// Horizontal offset in the strike's pixels
    pub x: i16,
    /// Vertical offset of the bottom edge from the baseline
    pub y: i16,
    pub width: u16,
    pub height: u16,
    /// Pixel size the strike was designed for
    pub pixels_per_em: u16,
    /// PNG-encoded image data
    pub png: Vec<u8>,
}
