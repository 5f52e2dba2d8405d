//! Image encoding, format chosen from the file extension

use anyhow::{Context, Result, bail};
use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

use crate::constants::encoding::{JPEG_EXTENSIONS, PNG_EXTENSIONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
}

impl OutputFormat {
    pub fn label(self) -> &'static str {
        match self {
            Self::Jpeg => "JPEG",
            Self::Png => "PNG",
        }
    }

    /// Pick the format from a file name's extension (case-insensitive)
    pub fn from_filename(filename: &str) -> Result<Self> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if JPEG_EXTENSIONS.contains(&extension.as_str()) {
            Ok(Self::Jpeg)
        } else if PNG_EXTENSIONS.contains(&extension.as_str()) {
            Ok(Self::Png)
        } else {
            bail!(
                "Unsupported image extension for '{}', expected one of: {}",
                filename,
                [JPEG_EXTENSIONS, PNG_EXTENSIONS].concat().join(", ")
            );
        }
    }
}

/// Encode `image` and write it to `path`
pub fn save(image: &RgbImage, path: &Path, format: OutputFormat, jpeg_quality: u8) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create image file {:?}", path))?;
    let mut writer = BufWriter::new(file);

    match format {
        OutputFormat::Jpeg => {
            let mut encoder = JpegEncoder::new_with_quality(&mut writer, jpeg_quality);
            encoder
                .encode_image(image)
                .with_context(|| format!("Failed to encode JPEG {:?}", path))?;
        }
        OutputFormat::Png => write_png(image, &mut writer)
            .with_context(|| format!("Failed to encode PNG {:?}", path))?,
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write image file {:?}", path))?;

    debug!(path = %path.display(), ?format, "Wrote image");
    Ok(())
}

fn write_png<W: Write>(image: &RgbImage, writer: W) -> Result<()> {
    let mut encoder = png::Encoder::new(writer, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(image.as_raw())?;
    png_writer.finish()?;
    Ok(())
}
