//! RGBA colors and color-string parsing.
//!
//! ## Usage
//!
//! Build colors from floats, packed ARGB integers, or strings such as
//! `"#RRGGBB"`, `"#AARRGGBB"` and a small set of named colors.
use std::str::FromStr;

use thiserror::Error;

/// A color in the linear sRGB color space with an alpha component.
///
/// Values are stored as `f32`s, typically in the range `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    /// Opaque black.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque red.
    pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    /// Opaque green.
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);
    /// Opaque blue.
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

    /// Creates a new `Color` from four `f32` values (red, green, blue, alpha).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new `Color` from four `u8` values (red, green, blue, alpha).
    #[inline]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Creates a color from a packed `0xAARRGGBB` integer.
    pub fn from_argb_u32(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self::from_rgba_u8(r, g, b, a)
    }

    /// Returns the same color with a different alpha.
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// The default color is fully transparent.
impl Default for Color {
    #[inline]
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

/// Errors produced when parsing a color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The input was empty or only whitespace.
    #[error("empty color string")]
    Empty,
    /// A `#` color did not have 6 or 8 hex digits.
    #[error("color `{0}` must have 6 or 8 hex digits after `#`")]
    InvalidLength(String),
    /// A `#` color contained a non-hex character.
    #[error("color `{0}` contains a non-hex digit")]
    InvalidDigit(String),
    /// The input is neither a `#` color nor a known color name.
    #[error("unknown color `{0}`")]
    UnknownName(String),
}

const NAMED_COLORS: &[(&str, u32)] = &[
    ("black", 0xFF00_0000),
    ("darkgray", 0xFF44_4444),
    ("darkgrey", 0xFF44_4444),
    ("gray", 0xFF88_8888),
    ("grey", 0xFF88_8888),
    ("lightgray", 0xFFCC_CCCC),
    ("lightgrey", 0xFFCC_CCCC),
    ("white", 0xFFFF_FFFF),
    ("red", 0xFFFF_0000),
    ("green", 0xFF00_FF00),
    ("blue", 0xFF00_00FF),
    ("yellow", 0xFFFF_FF00),
    ("cyan", 0xFF00_FFFF),
    ("magenta", 0xFFFF_00FF),
    ("aqua", 0xFF00_FFFF),
    ("fuchsia", 0xFFFF_00FF),
    ("lime", 0xFF00_FF00),
    ("maroon", 0xFF80_0000),
    ("navy", 0xFF00_0080),
    ("olive", 0xFF80_8000),
    ("purple", 0xFF80_0080),
    ("silver", 0xFFC0_C0C0),
    ("teal", 0xFF00_8080),
];

impl FromStr for Color {
    type Err = ColorParseError;

    /// Parses `#RRGGBB`, `#AARRGGBB`, or a case-insensitive color name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(hex) = s.strip_prefix('#') {
            // from_str_radix alone would accept a leading '+'
            if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(ColorParseError::InvalidDigit(s.to_owned()));
            }
            if hex.len() != 6 && hex.len() != 8 {
                return Err(ColorParseError::InvalidLength(s.to_owned()));
            }
            let value = u32::from_str_radix(hex, 16)
                .map_err(|_| ColorParseError::InvalidDigit(s.to_owned()))?;
            return Ok(if hex.len() == 6 {
                Self::from_argb_u32(0xFF00_0000 | value)
            } else {
                Self::from_argb_u32(value)
            });
        }

        let lower = s.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, argb)| Self::from_argb_u32(*argb))
            .ok_or_else(|| ColorParseError::UnknownName(s.to_owned()))
    }
}
