//! Runtime configuration for a generation run
//!
//! Merges command-line overrides on top of the optional manifest and the
//! built-in defaults. Precedence: CLI flag, then manifest, then default.

use anyhow::{Result, bail};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::manifest::Manifest;
use super::palette::Palette;
use super::placeholders::{PlaceholderSpec, default_placeholders};
use crate::constants::{encoding, paths};

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub output_dir: Option<PathBuf>,
    pub jpeg_quality: Option<u8>,
    pub fonts: Vec<String>,
    /// Restrict the run to these filenames
    pub only: Vec<String>,
}

/// Everything the generator needs, fully resolved
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub output_dir: PathBuf,
    pub jpeg_quality: u8,
    pub palette: Palette,
    /// Extra font candidates, probed before the built-in list
    pub fonts: Vec<String>,
    pub placeholders: Vec<PlaceholderSpec>,
}

impl RunConfig {
    pub fn resolve(manifest: Option<Manifest>, overrides: Overrides) -> Result<Self> {
        let manifest = manifest.unwrap_or_default();

        let output_dir = overrides
            .output_dir
            .or(manifest.output_dir)
            .unwrap_or_else(default_output_dir);

        let requested_quality = overrides
            .jpeg_quality
            .or(manifest.jpeg_quality)
            .unwrap_or(encoding::JPEG_QUALITY);
        let jpeg_quality = requested_quality.clamp(1, 100);
        if jpeg_quality != requested_quality {
            warn!(
                requested = requested_quality,
                used = jpeg_quality,
                "JPEG quality out of range, clamped"
            );
        }

        // CLI fonts are probed first
        let mut fonts = overrides.fonts;
        fonts.extend(manifest.fonts);

        let placeholders = select(
            manifest.placeholders.unwrap_or_else(default_placeholders),
            &overrides.only,
        )?;

        debug!(
            output_dir = %output_dir.display(),
            jpeg_quality,
            fonts = fonts.len(),
            placeholders = placeholders.len(),
            "Resolved run configuration"
        );

        Ok(Self {
            output_dir,
            jpeg_quality,
            palette: manifest.palette,
            fonts,
            placeholders,
        })
    }
}

/// Asset directory inside the project tree, independent of the working directory
fn default_output_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(paths::OUTPUT_DIR)
}

/// Keep only the named entries, preserving table order
fn select(placeholders: Vec<PlaceholderSpec>, only: &[String]) -> Result<Vec<PlaceholderSpec>> {
    if only.is_empty() {
        return Ok(placeholders);
    }

    let unknown: Vec<&str> = only
        .iter()
        .filter(|name| !placeholders.iter().any(|p| &p.filename == *name))
        .map(String::as_str)
        .collect();
    if !unknown.is_empty() {
        bail!("Unknown placeholder(s): {}", unknown.join(", "));
    }

    Ok(placeholders
        .into_iter()
        .filter(|p| only.contains(&p.filename))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_manifest() {
        let config = RunConfig::resolve(None, Overrides::default()).unwrap();
        assert_eq!(
            config.output_dir,
            Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/images")
        );
        assert!(config.output_dir.is_absolute());
        assert_eq!(config.jpeg_quality, 85);
        assert_eq!(config.placeholders, default_placeholders());
        assert!(config.fonts.is_empty());
    }

    #[test]
    fn test_cli_wins_over_manifest() {
        let manifest = Manifest {
            output_dir: Some(PathBuf::from("from-manifest")),
            jpeg_quality: Some(60),
            fonts: vec!["manifest.ttf".to_string()],
            ..Manifest::default()
        };
        let overrides = Overrides {
            output_dir: Some(PathBuf::from("from-cli")),
            fonts: vec!["cli.ttf".to_string()],
            ..Overrides::default()
        };

        let config = RunConfig::resolve(Some(manifest), overrides).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("from-cli"));
        assert_eq!(config.jpeg_quality, 60);
        assert_eq!(config.fonts, vec!["cli.ttf", "manifest.ttf"]);
    }

    #[test]
    fn test_quality_is_clamped() {
        let overrides = Overrides {
            jpeg_quality: Some(0),
            ..Overrides::default()
        };
        let config = RunConfig::resolve(None, overrides).unwrap();
        assert_eq!(config.jpeg_quality, 1);
    }

    #[test]
    fn test_only_filters_in_table_order() {
        let overrides = Overrides {
            only: vec!["care-k18.jpg".to_string(), "hero-bg.jpg".to_string()],
            ..Overrides::default()
        };
        let config = RunConfig::resolve(None, overrides).unwrap();
        let names: Vec<_> = config.placeholders.iter().map(|p| p.filename.as_str()).collect();
        assert_eq!(names, vec!["hero-bg.jpg", "care-k18.jpg"]);
    }

    #[test]
    fn test_only_rejects_unknown_names() {
        let overrides = Overrides {
            only: vec!["nope.jpg".to_string()],
            ..Overrides::default()
        };
        let err = RunConfig::resolve(None, overrides).unwrap_err();
        assert!(err.to_string().contains("nope.jpg"));
    }
}
