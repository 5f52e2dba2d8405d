//! Color type conversions and utilities
//!
//! Provides type-safe color handling with conversions between:
//! - Hex strings (#RRGGBB or #AARRGGBB format)
//! - ARGB32 values (u32)
//! - `image::Rgb<u8>` canvas pixels

use image::Rgb;
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Hex color in ARGB32 format (#AARRGGBB)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor(u32);

impl HexColor {
    /// Parse hex color string supporting multiple formats:
    /// - 6 digits: RRGGBB (full opacity assumed, becomes FFRRGGBB)
    /// - 8 digits: AARRGGBB (explicit alpha)
    /// - Optional '#' prefix supported but not required
    pub fn parse(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 && hex.len() != 8 {
            return None;
        }
        let value = u32::from_str_radix(hex, 16).ok()?;

        let argb = if hex.len() == 6 {
            0xFF_00_00_00 | value
        } else {
            value
        };

        Some(Self(argb))
    }

    /// Create from ARGB32 value
    #[cfg(test)]
    pub fn from_argb32(argb: u32) -> Self {
        Self(argb)
    }

    /// Create an opaque color from RGB components
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(0xFF_00_00_00 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Alpha channel (0-255)
    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Convert to a canvas pixel (alpha dropped)
    pub fn to_rgb(self) -> Rgb<u8> {
        let r = (self.0 >> 16) & 0xFF;
        let g = (self.0 >> 8) & 0xFF;
        let b = self.0 & 0xFF;
        Rgb([r as u8, g as u8, b as u8])
    }
}

/// Opaque colors print as #RRGGBB, translucent ones as #AARRGGBB
impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha() == 0xFF {
            write!(f, "#{:06X}", self.0 & 0x00_FF_FF_FF)
        } else {
            write!(f, "#{:08X}", self.0)
        }
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        HexColor::parse(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "invalid color '{}', expected #RRGGBB or #AARRGGBB",
                raw
            ))
        })
    }
}
