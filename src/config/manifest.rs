//! JSON manifest
//!
//! Optional file that replaces the built-in placeholder table and overrides
//! output settings. Every field may be omitted.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::palette::Palette;
use super::placeholders::PlaceholderSpec;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Output directory, relative paths resolve against the working directory
    pub output_dir: Option<PathBuf>,
    pub jpeg_quality: Option<u8>,
    pub palette: Palette,
    /// Font files or family names probed before the built-in candidates
    pub fonts: Vec<String>,
    /// `None` keeps the built-in table
    pub placeholders: Option<Vec<PlaceholderSpec>>,
}

impl Manifest {
    /// Load and validate a manifest file
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Loading manifest");

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest from {:?}", path))?;

        let manifest = Self::from_json(&contents)
            .with_context(|| format!("Invalid manifest {:?}", path))?;

        info!(
            path = %path.display(),
            placeholders = ?manifest.placeholders.as_ref().map(Vec::len),
            "Loaded manifest"
        );
        Ok(manifest)
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        let manifest: Manifest =
            serde_json::from_str(contents).context("Failed to parse manifest JSON")?;
        manifest.validate()?;
        Ok(manifest)
    }

    fn validate(&self) -> Result<()> {
        let Some(placeholders) = &self.placeholders else {
            return Ok(());
        };

        if placeholders.is_empty() {
            bail!("Manifest 'placeholders' list is empty");
        }

        let mut seen = HashSet::new();
        for spec in placeholders {
            spec.validate()?;
            if !seen.insert(spec.filename.to_ascii_lowercase()) {
                bail!("Duplicate placeholder filename '{}'", spec.filename);
            }
        }
        Ok(())
    }
}
