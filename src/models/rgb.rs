//! RGB color handling with strict hex parsing and contrast resolution.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::cast_lossless)]

use crate::error::{BrandError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Weighted brightness above which black text is chosen.
///
/// Compared against `299R + 587G + 114B`, i.e. the BT.601 luma scaled by 1000,
/// so the boundary at exactly 128 is exact.
const DARK_TEXT_THRESHOLD: u32 = 128_000;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Parses from `#RRGGBB` strings and serializes back to the same form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a `#RRGGBB` hex string.
    ///
    /// The leading `#` is required and the digits may be upper or lower case.
    /// Surrounding whitespace, shorthand (`#FFF`) and alpha (`#RRGGBBAA`) forms
    /// are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use brandkit::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// assert!(RgbColor::from_hex("00FF00").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`BrandError::InvalidColorFormat`] if the string is not `#RRGGBB`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || BrandError::InvalidColorFormat(hex.to_string());

        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;

        // from_str_radix accepts a leading '+', so check the digits first
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use brandkit::models::RgbColor;
    ///
    /// let color = RgbColor::new(0, 128, 255);
    /// assert_eq!(color.to_hex(), "#0080FF");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// ITU-R BT.601 weighted channel sum, `299R + 587G + 114B`.
    const fn weighted_brightness(&self) -> u32 {
        299 * self.r as u32 + 587 * self.g as u32 + 114 * self.b as u32
    }

    /// Perceived brightness `(299R + 587G + 114B) / 1000`, in `0.0..=255.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use brandkit::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(255, 255, 255).luma(), 255.0);
    /// assert_eq!(RgbColor::new(0, 0, 0).luma(), 0.0);
    /// ```
    #[must_use]
    pub fn luma(&self) -> f64 {
        f64::from(self.weighted_brightness()) / 1000.0
    }

    /// Returns the text color that stays legible on top of this color.
    ///
    /// Black when the luma is strictly above 128, white otherwise.
    #[must_use]
    pub const fn contrast_color(&self) -> ContrastColor {
        if self.weighted_brightness() > DARK_TEXT_THRESHOLD {
            ContrastColor::Black
        } else {
            ContrastColor::White
        }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = BrandError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for RgbColor {
    type Error = BrandError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<RgbColor> for String {
    fn from(color: RgbColor) -> Self {
        color.to_hex()
    }
}

/// Foreground color picked for legibility over a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContrastColor {
    /// `#000000`
    #[serde(rename = "#000000")]
    Black,
    /// `#FFFFFF`
    #[serde(rename = "#FFFFFF")]
    White,
}

impl ContrastColor {
    /// Hex form of the color.
    #[must_use]
    pub const fn hex(&self) -> &'static str {
        match self {
            Self::Black => "#000000",
            Self::White => "#FFFFFF",
        }
    }

    /// Lowercase name of the color ("black" or "white").
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
        }
    }
}

impl fmt::Display for ContrastColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

/// Resolves the legible foreground color for a `#RRGGBB` background.
///
/// # Examples
///
/// ```
/// use brandkit::models::{resolve_contrast_color, ContrastColor};
///
/// assert_eq!(resolve_contrast_color("#FFFFFF").unwrap(), ContrastColor::Black);
/// assert_eq!(resolve_contrast_color("#000000").unwrap(), ContrastColor::White);
/// assert!(resolve_contrast_color("#GGGGGG").is_err());
/// ```
///
/// # Errors
///
/// Returns [`BrandError::InvalidColorFormat`] for malformed input instead of
/// defaulting to white.
pub fn resolve_contrast_color(hex: &str) -> Result<ContrastColor> {
    Ok(RgbColor::from_hex(hex)?.contrast_color())
}
