//! Placeholder table
//!
//! Each entry names one image slot on the site: the file it is written to,
//! its size and the two label texts drawn onto it.

use anyhow::{Result, bail};
use serde::Deserialize;

use crate::common::types::Dimensions;
use crate::constants::layout::MAX_SIDE;
use crate::render::encode::OutputFormat;

/// One placeholder image to generate
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaceholderSpec {
    pub filename: String,
    #[serde(flatten)]
    pub dimensions: Dimensions,
    pub title: String,
    /// May span several lines separated by `\n`
    #[serde(default)]
    pub subtitle: String,
}

impl PlaceholderSpec {
    pub fn new(filename: &str, width: u32, height: u32, title: &str, subtitle: &str) -> Self {
        Self {
            filename: filename.to_string(),
            dimensions: Dimensions::new(width, height),
            title: title.to_string(),
            subtitle: subtitle.to_string(),
        }
    }

    /// Check the entry can be rendered and written inside the output directory
    pub fn validate(&self) -> Result<()> {
        if self.filename.trim().is_empty() {
            bail!("Placeholder filename must not be empty");
        }
        if self.filename.contains(['/', '\\']) || self.filename.contains("..") {
            bail!(
                "Placeholder filename '{}' must be a plain file name without path components",
                self.filename
            );
        }
        OutputFormat::from_filename(&self.filename)?;

        let Dimensions { width, height } = self.dimensions;
        if !self.dimensions.is_positive() {
            bail!(
                "Placeholder '{}' has non-positive dimensions {}x{}",
                self.filename,
                width,
                height
            );
        }
        if width > MAX_SIDE || height > MAX_SIDE {
            bail!(
                "Placeholder '{}' is {}x{}, sides are limited to {} px",
                self.filename,
                width,
                height,
                MAX_SIDE
            );
        }
        Ok(())
    }

    /// Subtitle block lines: the subtitle text followed by the size label.
    /// Blank lines stay as empty rows; a trailing newline adds none.
    pub fn subtitle_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.subtitle.lines().map(str::to_string).collect();
        lines.push(self.dimensions.to_string());
        lines
    }

    /// Bottom label naming the file
    pub fn footer_label(&self) -> String {
        format!("[ {} ]", self.filename)
    }
}

/// (filename, width, height, title, subtitle)
const STUDIO_SLOTS: &[(&str, u32, u32, &str, &str)] = &[
    // Wide backgrounds
    ("hero-bg.jpg", 1920, 1080, "HERO — Фон", "Главный экран сайта"),
    ("cta-bg.jpg", 1920, 1080, "CTA — Фон", "Секция «Записаться»"),
    // About (portrait)
    ("about-studio.jpg", 800, 1000, "О СТУДИИ", "Фото студии / работы колориста"),
    // Techniques (portrait panels)
    ("technique-balayage.jpg", 800, 1000, "БАЛАЯЖ", "Фото результата балаяжа"),
    ("technique-airtouch.jpg", 800, 1000, "AIRTOUCH", "Фото результата airtouch"),
    ("technique-total-blonde.jpg", 800, 1000, "TOTAL BLONDE", "Фото результата total blonde"),
    ("technique-intelligent-blonde.jpg", 800, 1000, "ИНТЕЛЛ. БЛОНД", "Фото интеллигентного блонда"),
    ("technique-brazilian-blonde.jpg", 800, 1000, "БРАЗ. БЛОНД", "Фото бразильского блонда"),
    ("technique-grey-coverage.jpg", 800, 1000, "ШИТЬЁ СЕДИНЫ", "Фото шитья седины"),
    ("technique-highlights.jpg", 800, 1000, "МЕЛИРОВАНИЕ", "Фото мелирования"),
    // Care products (landscape cards)
    ("care-k18.jpg", 800, 600, "K18", "Фото продукта / процедуры K18"),
    ("care-tokio-inkarami.jpg", 800, 600, "TOKIO INKARAMI", "Фото продукта Tokio Inkarami"),
    ("care-jbeverly-hills.jpg", 800, 600, "J BEVERLY HILLS", "Фото продукта J Beverly Hills"),
];

/// The built-in table used when no manifest provides one
pub fn default_placeholders() -> Vec<PlaceholderSpec> {
    STUDIO_SLOTS
        .iter()
        .map(|&(filename, width, height, title, subtitle)| {
            PlaceholderSpec::new(filename, width, height, title, subtitle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_table_is_valid() {
        let specs = default_placeholders();
        assert_eq!(specs.len(), 13);
        for spec in &specs {
            spec.validate().unwrap();
        }

        let names: HashSet<_> = specs.iter().map(|s| s.filename.as_str()).collect();
        assert_eq!(names.len(), specs.len(), "filenames must be unique");
    }

    #[test]
    fn test_subtitle_lines_end_with_dimensions() {
        let spec = PlaceholderSpec::new("a.jpg", 800, 600, "A", "First\nSecond");
        assert_eq!(spec.subtitle_lines(), vec!["First", "Second", "800 × 600"]);

        let bare = PlaceholderSpec::new("b.png", 10, 20, "B", "");
        assert_eq!(bare.subtitle_lines(), vec!["10 × 20"]);
    }

    #[test]
    fn test_subtitle_lines_keep_blank_rows() {
        let spec = PlaceholderSpec::new("a.jpg", 800, 600, "A", "a\n\nb");
        assert_eq!(spec.subtitle_lines(), vec!["a", "", "b", "800 × 600"]);

        let trailing = PlaceholderSpec::new("a.jpg", 800, 600, "A", "a\n");
        assert_eq!(trailing.subtitle_lines(), vec!["a", "800 × 600"]);
    }

    #[test]
    fn test_footer_label() {
        let spec = PlaceholderSpec::new("care-k18.jpg", 800, 600, "K18", "");
        assert_eq!(spec.footer_label(), "[ care-k18.jpg ]");
    }

    #[test]
    fn test_validate_rejects_bad_entries() {
        let zero = PlaceholderSpec::new("a.jpg", 0, 600, "A", "");
        assert!(zero.validate().is_err());

        let huge = PlaceholderSpec::new("a.jpg", 20_000, 600, "A", "");
        assert!(huge.validate().is_err());

        let nested = PlaceholderSpec::new("../a.jpg", 800, 600, "A", "");
        assert!(nested.validate().is_err());

        let empty = PlaceholderSpec::new("  ", 800, 600, "A", "");
        assert!(empty.validate().is_err());

        let gif = PlaceholderSpec::new("a.gif", 800, 600, "A", "");
        assert!(gif.validate().is_err());

        let upper = PlaceholderSpec::new("A.JPEG", 800, 600, "A", "");
        assert!(upper.validate().is_ok());
    }

    #[test]
    fn test_deserialize_flat_dimensions() {
        let json = r#"{"filename":"x.png","width":320,"height":240,"title":"X"}"#;
        let spec: PlaceholderSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.dimensions, Dimensions::new(320, 240));
        assert_eq!(spec.subtitle, "");
    }
}
