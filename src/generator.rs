//! Generation run: resolve the font once, then draw and save every placeholder in order

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::common::types::Dimensions;
use crate::config::RunConfig;
use crate::font::{FontFace, discovery};
use crate::render::{OutputFormat, draw_placeholder, encode};

/// One written file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub path: PathBuf,
    pub dimensions: Dimensions,
    pub format: OutputFormat,
}

/// Outcome of a run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub output_dir: PathBuf,
    pub font_name: String,
    pub images: Vec<GeneratedImage>,
}

/// Probe the configured and built-in candidates
pub fn resolve_font(config: &RunConfig) -> FontFace {
    FontFace::resolve(&discovery::candidates(&config.fonts))
}

/// Create the output directory and write every placeholder into it
pub fn run(config: &RunConfig, face: &FontFace) -> Result<RunReport> {
    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {:?}",
            config.output_dir
        )
    })?;

    info!(
        output_dir = %config.output_dir.display(),
        count = config.placeholders.len(),
        font = %face.name(),
        "Generating placeholders"
    );

    if face.is_builtin() {
        warn!("Using the built-in bitmap font: labels outside Latin/Greek render as '?'");
    }

    let mut images = Vec::with_capacity(config.placeholders.len());

    for spec in &config.placeholders {
        let format = OutputFormat::from_filename(&spec.filename)?;
        let path = config.output_dir.join(&spec.filename);

        debug!(file = %spec.filename, dimensions = %spec.dimensions, "Drawing placeholder");
        let image = draw_placeholder(spec, &config.palette, face);
        encode::save(&image, &path, format, config.jpeg_quality)?;

        info!(file = %spec.filename, dimensions = %spec.dimensions, "Wrote placeholder");
        images.push(GeneratedImage {
            path,
            dimensions: spec.dimensions,
            format,
        });
    }

    Ok(RunReport {
        output_dir: config.output_dir.clone(),
        font_name: face.name().to_string(),
        images,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Overrides, PlaceholderSpec};

    fn config_in(output_dir: PathBuf, placeholders: Vec<PlaceholderSpec>) -> RunConfig {
        let mut config = RunConfig::resolve(
            None,
            Overrides {
                output_dir: Some(output_dir),
                ..Overrides::default()
            },
        )
        .unwrap();
        config.placeholders = placeholders;
        config
    }

    #[test]
    fn test_creates_missing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("assets").join("images");
        assert!(!output.exists());

        let config = config_in(
            output.clone(),
            vec![PlaceholderSpec::new("a.png", 40, 30, "A", "")],
        );
        run(&config, &FontFace::Builtin).unwrap();

        assert!(output.is_dir());
        assert!(output.join("a.png").is_file());
    }

    #[test]
    fn test_every_default_entry_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(
            dir.path().to_path_buf(),
            crate::config::placeholders::default_placeholders(),
        );

        let report = run(&config, &FontFace::Builtin).unwrap();
        assert_eq!(report.images.len(), 13);
        assert_eq!(report.font_name, "built-in 8x8");

        for spec in &config.placeholders {
            let path = dir.path().join(&spec.filename);
            assert!(path.is_file(), "missing {}", spec.filename);

            let decoded = image::open(&path).unwrap();
            assert_eq!(
                (decoded.width(), decoded.height()),
                spec.dimensions.as_tuple()
            );
        }
    }

    #[test]
    fn test_mixed_formats() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(
            dir.path().to_path_buf(),
            vec![
                PlaceholderSpec::new("a.jpeg", 64, 48, "A", ""),
                PlaceholderSpec::new("b.png", 48, 64, "B", ""),
            ],
        );

        let report = run(&config, &resolve_font(&config)).unwrap();
        let formats: Vec<_> = report.images.iter().map(|i| i.format).collect();
        assert_eq!(formats, vec![OutputFormat::Jpeg, OutputFormat::Png]);

        let png = image::open(dir.path().join("b.png")).unwrap();
        assert_eq!((png.width(), png.height()), (48, 64));
    }

    #[test]
    fn test_unwritable_output_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, b"").unwrap();

        let config = config_in(
            blocker.join("images"),
            vec![PlaceholderSpec::new("a.png", 4, 4, "A", "")],
        );
        let err = run(&config, &FontFace::Builtin).unwrap_err();
        assert!(err.to_string().contains("Failed to create output directory"));
    }
}
