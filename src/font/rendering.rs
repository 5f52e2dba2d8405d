//! Text rasterization (Fontdue + built-in bitmap fallback)

use anyhow::{Context, Result};
use fontdue::{Font, FontSettings};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use super::builtin;
use super::discovery::FontCandidate;

/// Rendered line of text as an 8-bit coverage mask (row-major, one byte per pixel)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedText {
    pub width: usize,
    pub height: usize,
    pub coverage: Vec<u8>,
}

impl RenderedText {
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            coverage: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Loaded font, independent of pixel size
#[derive(Debug)]
pub enum FontFace {
    TrueType { font: Font, font_name: String },
    /// Built-in 8x8 bitmap font
    Builtin,
}

impl FontFace {
    /// Load a TrueType/OpenType font (or the first face of a collection) from a file
    pub fn from_path(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Attempting to load font from path");

        let font_data = fs::read(path).with_context(|| {
            format!(
                "Failed to read font file: {}. Check that the file exists and is readable.",
                path.display()
            )
        })?;

        let font = Font::from_bytes(font_data, FontSettings::default()).map_err(|e| {
            anyhow::anyhow!(
                "Failed to parse font file '{}': {}. Font may be corrupt or in an unsupported format.",
                path.display(),
                e
            )
        })?;

        let font_name = font
            .name()
            .map(str::to_string)
            .or_else(|| {
                path.file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
            })
            .unwrap_or_default();

        debug!(path = %path.display(), font = %font_name, "Successfully loaded font from path");
        Ok(Self::TrueType { font, font_name })
    }

    /// First candidate that exists and parses wins; otherwise the built-in font
    pub fn resolve(candidates: &[FontCandidate]) -> Self {
        for candidate in candidates {
            let Some(path) = candidate.locate() else {
                continue;
            };

            match Self::from_path(&path) {
                Ok(face) => {
                    info!(font = %face.name(), path = %path.display(), "Selected font");
                    return face;
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping unusable font");
                }
            }
        }

        info!("No TrueType font available, using built-in bitmap font");
        Self::Builtin
    }

    pub fn name(&self) -> &str {
        match self {
            Self::TrueType { font_name, .. } => font_name,
            Self::Builtin => "built-in 8x8",
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin)
    }

    /// Bind the face to a pixel size
    pub fn sized(&self, size: f32) -> SizedFont<'_> {
        SizedFont { face: self, size }
    }
}

/// A face at a fixed pixel size
#[derive(Debug, Clone, Copy)]
pub struct SizedFont<'a> {
    face: &'a FontFace,
    size: f32,
}

impl SizedFont<'_> {
    /// Bounding box of the rendered line (width, height)
    #[cfg(test)]
    pub fn measure(&self, text: &str) -> (usize, usize) {
        let rendered = self.render(text);
        (rendered.width, rendered.height)
    }

    /// Rasterize a single line. The mask's top edge is the tallest glyph's top,
    /// its bottom edge the deepest descender.
    pub fn render(&self, text: &str) -> RenderedText {
        match self.face {
            FontFace::Builtin => builtin::render(text, builtin::scale_for(self.size)),
            FontFace::TrueType { font, .. } => rasterize_line(font, self.size, text),
        }
    }
}

fn rasterize_line(font: &Font, size: f32, text: &str) -> RenderedText {
    if text.is_empty() {
        return RenderedText::empty();
    }

    let mut glyphs = Vec::new();
    let mut x = 0.0f32;
    let mut left = i32::MAX;
    let mut right = i32::MIN;
    let mut max_ascent = 0i32;
    let mut max_descent = 0i32;

    for ch in text.chars().filter(|c| !c.is_control()) {
        let (metrics, bitmap) = font.rasterize(ch, size);
        let glyph_x = x.round() as i32 + metrics.xmin;
        if metrics.width > 0 && metrics.height > 0 {
            max_ascent = max_ascent.max(metrics.height as i32 + metrics.ymin);
            max_descent = max_descent.max(-metrics.ymin);
            left = left.min(glyph_x);
            right = right.max(glyph_x + metrics.width as i32);
            glyphs.push((glyph_x, metrics, bitmap));
        }
        x += metrics.advance_width;
    }

    // Ink bounding box: a negative left bearing widens the mask to the left
    if glyphs.is_empty() {
        return RenderedText::empty();
    }
    let width = (right - left).max(0) as usize;
    let height = (max_ascent + max_descent).max(0) as usize;

    if width == 0 || height == 0 {
        return RenderedText::empty();
    }

    let mut coverage = vec![0u8; width * height];

    for (glyph_x, metrics, bitmap) in glyphs {
        let top = max_ascent - (metrics.height as i32 + metrics.ymin);

        for gy in 0..metrics.height {
            for gx in 0..metrics.width {
                let px = glyph_x - left + gx as i32;
                let py = top + gy as i32;

                if px < 0 || py < 0 || px >= width as i32 || py >= height as i32 {
                    continue;
                }

                let value = bitmap[gy * metrics.width + gx];
                let idx = py as usize * width + px as usize;
                // Overlapping glyphs (kerned pairs) keep the stronger coverage
                coverage[idx] = coverage[idx].max(value);
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
    use crate::font::discovery;

    #[test]
    fn test_resolve_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let candidates = vec![
            FontCandidate::Path(dir.path().join("missing.ttf")),
            FontCandidate::Path(dir.path().join("also-missing.otf")),
        ];

        let face = FontFace::resolve(&candidates);
        assert!(face.is_builtin());

        let (w, h) = face.sized(28.0).measure("HERO");
        assert!(w > 0 && h > 0);
    }

    #[test]
    fn test_resolve_skips_corrupt_font() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("bogus.ttf");
        fs::write(&bogus, b"not a font").unwrap();

        assert!(FontFace::from_path(&bogus).is_err());

        let face = FontFace::resolve(&[FontCandidate::Path(bogus)]);
        assert!(face.is_builtin());
    }

    #[test]
    fn test_system_resolution_is_always_usable() {
        // Whatever this machine has installed, resolution yields a working font
        let face = FontFace::resolve(&discovery::candidates(&[]));
        let sized = face.sized(18.0);
        let rendered = sized.render("800 × 600");
        assert!(!rendered.is_empty());
        assert_eq!(rendered.coverage.len(), rendered.width * rendered.height);
        assert!(rendered.coverage.iter().any(|&c| c > 0));
    }

    #[test]
    fn test_larger_size_renders_larger() {
        let face = FontFace::resolve(&discovery::candidates(&[]));
        let (small_w, small_h) = face.sized(14.0).measure("Placeholder");
        let (large_w, large_h) = face.sized(56.0).measure("Placeholder");
        assert!(large_w > small_w);
        assert!(large_h > small_h);
    }

    #[test]
    fn test_left_bearing_overhang_keeps_all_ink() {
        let FontFace::TrueType { font, .. } = FontFace::resolve(&discovery::candidates(&[]))
        else {
            // No TrueType font on this machine
            return;
        };

        for text in ["j", "ƒ", "jo"] {
            let glyph_ink: u64 = text
                .chars()
                .map(|ch| {
                    let (_, bitmap) = font.rasterize(ch, 90.0);
                    bitmap.iter().map(|&c| c as u64).sum::<u64>()
                })
                .sum();

            let rendered = rasterize_line(&font, 90.0, text);
            let mask_ink: u64 = rendered.coverage.iter().map(|&c| c as u64).sum();
            if text.chars().count() == 1 {
                assert_eq!(mask_ink, glyph_ink, "ink lost rendering {text:?}");
            } else {
                // Touching neighbours keep the stronger coverage, a sliver at most
                assert!(mask_ink * 100 >= glyph_ink * 99, "ink lost rendering {text:?}");
            }
        }

        let (metrics, _) = font.rasterize('j', 90.0);
        let rendered = rasterize_line(&font, 90.0, "j");
        assert_eq!(rendered.width, metrics.width);
    }

    #[test]
    fn test_empty_text_renders_nothing() {
        let face = FontFace::Builtin;
        assert!(face.sized(20.0).render("").is_empty());
    }
}
