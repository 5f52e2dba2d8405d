//! Placeholder color palette

use serde::Deserialize;

use crate::common::color::HexColor;
use crate::constants::palette;

/// Colors used for each drawn element. Missing JSON fields keep the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: HexColor,
    pub border: HexColor,
    pub title: HexColor,
    pub subtitle: HexColor,
    pub footer: HexColor,
    pub guides: HexColor,
}

fn builtin(hex: &str) -> HexColor {
    // Only called with the constants below, which are valid hex
    HexColor::parse(hex).unwrap_or(HexColor::from_rgb(0, 0, 0))
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: builtin(palette::BACKGROUND),
            border: builtin(palette::BORDER),
            title: builtin(palette::TITLE),
            subtitle: builtin(palette::SUBTITLE),
            footer: builtin(palette::FOOTER),
            guides: builtin(palette::GUIDES),
        }
    }
}
