//! Font discovery: candidate paths, user font directory and fontconfig lookup

use anyhow::{Context, Result};
use fontconfig::{Fontconfig, Pattern};
use std::ffi::CString;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::constants::fonts::{FONT_CANDIDATES, USER_FONT_FILE};

/// Font file extensions recognised when deciding whether a name is a path
const FONT_EXTENSIONS: &[&str] = &["ttf", "otf", "ttc"];

/// Common font style names for parsing family+style strings (longest first)
const KNOWN_STYLES: &[&str] = &[
    "Condensed Bold",
    "Bold Oblique",
    "Bold Italic",
    "SemiBold",
    "Condensed",
    "Regular",
    "Medium",
    "Light",
    "Bold",
    "Book",
    "Oblique",
    "Italic",
];

/// Where a font might come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontCandidate {
    /// Font file on disk
    Path(PathBuf),
    /// Family name (optionally with style) resolved through fontconfig
    Family(String),
}

impl FontCandidate {
    /// Classify a user-supplied value. Existing files and names with a font
    /// extension are paths, everything else is a family name.
    pub fn parse(value: &str) -> Self {
        let path = Path::new(value);
        let has_font_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| FONT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));

        if path.is_file() || has_font_extension {
            Self::Path(path.to_path_buf())
        } else {
            Self::Family(value.to_string())
        }
    }

    /// Font file for this candidate, if one exists right now
    pub fn locate(&self) -> Option<PathBuf> {
        match self {
            Self::Path(path) => {
                if path.is_file() {
                    Some(path.clone())
                } else {
                    debug!(path = %path.display(), "Font candidate not found");
                    None
                }
            }
            Self::Family(name) => match find_font_path(name) {
                Ok(path) => Some(path),
                Err(e) => {
                    warn!(font = %name, error = %e, "Font family not available");
                    None
                }
            },
        }
    }
}

/// Ordered candidate list: user-supplied entries, the known system paths,
/// then the user's font directory.
pub fn candidates(extra: &[String]) -> Vec<FontCandidate> {
    let mut list: Vec<FontCandidate> = extra.iter().map(|v| FontCandidate::parse(v)).collect();

    list.extend(
        FONT_CANDIDATES
            .iter()
            .map(|path| FontCandidate::Path(PathBuf::from(path))),
    );

    if let Some(font_dir) = dirs::font_dir() {
        list.push(FontCandidate::Path(font_dir.join(USER_FONT_FILE)));
    }

    list
}

/// Helper to parse a font string into family and optional style.
///
/// Example: "Open Sans Condensed Bold" -> ("Open Sans", Some("Condensed Bold"))
fn parse_font_name(font_name: &str) -> (&str, Option<&str>) {
    for style in KNOWN_STYLES {
        if let Some(prefix) = font_name.strip_suffix(style)
            && prefix.ends_with(' ')
        {
            let family_name = prefix.trim();
            if !family_name.is_empty() {
                return (family_name, Some(*style));
            }
        }
    }
    (font_name, None)
}

/// Find the font file fontconfig matches for a family name or full font name
pub fn find_font_path(font_name: &str) -> Result<PathBuf> {
    let fc = Fontconfig::new().context("Failed to initialize fontconfig")?;

    let (family_name, style_name) = parse_font_name(font_name);

    let mut pattern = Pattern::new(&fc);
    let family_cstr = CString::new(family_name)
        .with_context(|| format!("Invalid family name: {}", family_name))?;
    pattern.add_string(fontconfig::FC_FAMILY, &family_cstr);

    if let Some(style) = style_name {
        let style_cstr =
            CString::new(style).with_context(|| format!("Invalid style name: {}", style))?;
        pattern.add_string(fontconfig::FC_STYLE, &style_cstr);
    }

    let matched = pattern.font_match();

    // fontconfig always returns something; a different family means "not installed"
    if let Some(matched_family) = matched.get_string(fontconfig::FC_FAMILY)
        && !matched_family.eq_ignore_ascii_case(family_name)
    {
        return Err(anyhow::anyhow!(
            "Font '{}' not found - fontconfig returned family '{}' instead",
            font_name,
            matched_family
        ));
    }

    let file_path = matched
        .filename()
        .with_context(|| format!("No font file found for '{}'", font_name))?;

    let path = PathBuf::from(file_path);
    if !path.is_file() {
        return Err(anyhow::anyhow!(
            "Font file path '{}' does not exist",
            path.display()
        ));
    }

    debug!(
        font = font_name,
        family = family_name,
        style = ?style_name,
        path = %path.display(),
        "Resolved font path via fontconfig"
    );

    Ok(path)
}
