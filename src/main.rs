//! Try-on CLI - composite a garment photo onto a person photo.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tryon::{process_images, Config, TryOnEngine, TryOnOutcome};

/// Composite a garment photo onto a person photo using a pretrained model.
#[derive(Parser, Debug)]
#[command(name = "tryon")]
#[command(version, about, long_about = None)]
struct Args {
    /// Person image path.
    #[arg(value_name = "PERSON")]
    person: PathBuf,

    /// Garment image path.
    #[arg(value_name = "GARMENT")]
    garment: PathBuf,

    /// Output image path.
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Path to the pretrained try-on model.
    #[arg(short, long, default_value = "models/tryon.onnx", value_name = "PATH")]
    model: PathBuf,

    /// Output JPEG quality (1-100).
    #[arg(short, long, default_value = "95", value_name = "INT")]
    quality: u8,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("tryon={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    let config = Config {
        model_path: args.model.clone(),
        output_quality: args.quality,
    };

    // A failed load is fatal: without a model there is no try-on capability.
    let mut engine =
        TryOnEngine::from_config(&config).context("Failed to initialize the try-on engine")?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    spinner.set_message("Running try-on...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = process_images(
        &mut engine,
        Some(args.person.as_path()),
        Some(args.garment.as_path()),
    );

    spinner.finish_and_clear();

    match outcome {
        TryOnOutcome::Image(image) => {
            tryon::image::save_image(&image, &args.output, config.output_quality)
                .context("Failed to save result image")?;

            println!(
                "Successfully processed {} + {} -> {}",
                args.person.display(),
                args.garment.display(),
                args.output.display()
            );
        }
        TryOnOutcome::Message(message) => println!("{message}"),
    }

    Ok(())
}
