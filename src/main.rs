use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rusty_image_compression::{load_image, save_image, LowRankApproximator};
use std::path::PathBuf;

/// Compress an image by keeping a percentage of the singular values of each channel.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Percentage of singular values to keep, in [0, 100]
    #[arg(allow_negative_numbers = true)]
    retention: f64,

    /// Image to compress
    #[arg(default_value = "test.jpg")]
    input: PathBuf,

    /// Where to write the compressed image
    #[arg(default_value = "test_output_SVD.jpg")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let image = load_image(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    info!(
        "loaded {} ({}x{}, {} channel(s))",
        cli.input.display(),
        image.height(),
        image.width(),
        image.channels()
    );

    let approximator = LowRankApproximator::default();
    let compressed = approximator
        .approximate(&image, cli.retention)
        .context("low rank approximation failed")?;

    save_image(&compressed, &cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    info!(
        "wrote {} keeping {}% of the singular values",
        cli.output.display(),
        cli.retention
    );

    Ok(())
}
