#![deny(unsafe_code)]

mod common;
mod config;
mod constants;
mod font;
mod generator;
mod render;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use config::{Manifest, Overrides, RunConfig};

#[derive(Parser)]
#[command(name = "placeholder-forge")]
#[command(version)]
#[command(about = "Generate labeled placeholder images for website asset slots", long_about = None)]
struct Cli {
    /// Directory the images are written to (created if missing) [default: <crate>/assets/images]
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// JSON manifest replacing the built-in placeholder table
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Font file or family name, tried before the built-in candidates (repeatable)
    #[arg(short, long = "font")]
    fonts: Vec<String>,

    /// Only generate the named file (repeatable)
    #[arg(long)]
    only: Vec<String>,

    /// JPEG quality
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: Option<u8>,

    /// Print the placeholder table and exit without writing anything
    #[arg(long)]
    list: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG overrides the verbosity flag
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    let manifest = cli.manifest.as_deref().map(Manifest::load).transpose()?;
    let config = RunConfig::resolve(
        manifest,
        Overrides {
            output_dir: cli.output_dir,
            jpeg_quality: cli.quality,
            fonts: cli.fonts,
            only: cli.only,
        },
    )?;

    if cli.list {
        for spec in &config.placeholders {
            println!(
                "{:<40} {:>13}  {}",
                spec.filename,
                spec.dimensions.to_string(),
                spec.title
            );
        }
        return Ok(());
    }

    let face = generator::resolve_font(&config);
    let report = generator::run(&config, &face)?;

    for image in &report.images {
        println!(
            "  ✓ {:<45} {:>13}  {}",
            image.path.display().to_string(),
            image.dimensions.to_string(),
            image.format.label()
        );
    }
    println!(
        "\nDone: {} file(s) in {} (font: {})",
        report.images.len(),
        report.output_dir.display(),
        report.font_name
    );

    Ok(())
}
