//! Built-in 8x8 bitmap font, used when no TrueType font can be loaded
//!
//! Covers Basic Latin, Latin-1 and Greek. Anything else renders as the
//! replacement glyph so labels keep their width.

use font8x8::{BASIC_FONTS, GREEK_FONTS, LATIN_FONTS, UnicodeFonts};

use super::rendering::RenderedText;
use crate::constants::fonts::{BUILTIN_CELL, BUILTIN_REPLACEMENT};

/// Integer scale factor that brings the 8 px cell closest to `px`
pub fn scale_for(px: f32) -> u32 {
    ((px / BUILTIN_CELL as f32).round() as u32).max(1)
}

/// Row bitmaps for `ch`; bit 0 of each row is the leftmost pixel
fn glyph(ch: char) -> [u8; 8] {
    BASIC_FONTS
        .get(ch)
        .or_else(|| LATIN_FONTS.get(ch))
        .or_else(|| GREEK_FONTS.get(ch))
        .or_else(|| BASIC_FONTS.get(BUILTIN_REPLACEMENT))
        .unwrap_or([0; 8])
}

/// Rasterize a single line at the given integer scale
pub fn render(text: &str, scale: u32) -> RenderedText {
    let cell = (BUILTIN_CELL * scale) as usize;
    let chars: Vec<char> = text.chars().filter(|c| !c.is_control()).collect();
    if chars.is_empty() {
        return RenderedText::empty();
    }

    let width = chars.len() * cell;
    let height = cell;
    let mut coverage = vec![0u8; width * height];

    for (index, ch) in chars.iter().enumerate() {
        let origin_x = index * cell;
        for (row, bits) in glyph(*ch).iter().enumerate() {
            for col in 0..BUILTIN_CELL as usize {
                if bits & (1 << col) == 0 {
                    continue;
                }
                // Each set bit becomes a scale × scale block
                for dy in 0..scale as usize {
                    let y = row * scale as usize + dy;
                    let start = y * width + origin_x + col * scale as usize;
                    coverage[start..start + scale as usize].fill(u8::MAX);
                }
            }
        }
    }

    RenderedText {
        width,
        height,
        coverage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_for_sizes() {
        assert_eq!(scale_for(4.0), 1);
        assert_eq!(scale_for(14.0), 2);
        assert_eq!(scale_for(28.0), 4);
        assert_eq!(scale_for(90.0), 11);
    }

    #[test]
    fn test_render_dimensions_scale() {
        let small = render("AB", 1);
        assert_eq!((small.width, small.height), (16, 8));

        let large = render("AB", 3);
        assert_eq!((large.width, large.height), (48, 24));
        assert_eq!(large.coverage.len(), 48 * 24);
    }

    #[test]
    fn test_render_draws_ink() {
        let text = render("H", 1);
        assert!(text.coverage.iter().any(|&c| c == u8::MAX));

        let space = render(" ", 1);
        assert_eq!(space.width, 8);
        assert!(space.coverage.iter().all(|&c| c == 0));
    }

    #[test]
    fn test_unsupported_chars_use_replacement() {
        let cyrillic = render("Ж", 1);
        let replacement = render("?", 1);
        assert_eq!(cyrillic.coverage, replacement.coverage);
    }

    #[test]
    fn test_empty_text() {
        let text = render("", 2);
        assert_eq!((text.width, text.height), (0, 0));
        assert!(text.coverage.is_empty());
    }
}
