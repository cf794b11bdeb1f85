// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stitchwerk — stitch images into one PNG.
//
// Entry point. Initialises logging, loads config, feeds the files given on
// the command line through a stitching session and exports the result.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use stitchwerk_compose::Compositor;
use stitchwerk_core::AppConfig;
use stitchwerk_core::error::Result;
use stitchwerk_core::human_errors::humanize_error;
use stitchwerk_core::types::{Background, LayoutAxis, ResampleFilter, SizePolicy};
use tracing::{error, info};

use stitchwerk_app::services::{config_store, intake};
use stitchwerk_app::{LogNotifier, StitchSession};

/// Stitch images side by side or top to bottom into a single PNG
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Images to stitch, in order
    images: Vec<PathBuf>,

    /// Stitch direction: horizontal or vertical
    #[arg(short, long)]
    axis: Option<LayoutAxis>,

    /// Size normalisation: none, min or max
    #[arg(short, long)]
    policy: Option<SizePolicy>,

    /// Background: "transparent" or a hex colour such as #ff0000
    #[arg(short, long)]
    background: Option<Background>,

    /// Resampling filter: nearest, triangle, catmull-rom, gaussian or lanczos3
    #[arg(long)]
    filter: Option<ResampleFilter>,

    /// Largest canvas area in pixels
    #[arg(long)]
    max_canvas_pixels: Option<u64>,

    /// Directory to write the stitched image into
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Config file (defaults to the data directory's config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Save the effective settings back to the config file
    #[arg(long)]
    save_config: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Overlay command-line flags on top of the loaded config.
    fn apply(&self, config: &mut AppConfig) {
        if let Some(axis) = self.axis {
            config.settings.axis = axis;
        }
        if let Some(policy) = self.policy {
            config.settings.policy = policy;
        }
        if let Some(background) = self.background {
            config.settings.background = background;
        }
        if let Some(filter) = self.filter {
            config.filter = filter;
        }
        if let Some(limit) = self.max_canvas_pixels {
            config.max_canvas_pixels = limit;
        }
        if let Some(dir) = &self.out_dir {
            config.output_dir = Some(dir.clone());
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Stitchwerk starting");

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let human = humanize_error(&err);
            error!(error = %err, severity = ?human.severity, "{}", human.message);
            eprintln!("{}\n{}", human.message, human.suggestion);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(config_store::default_config_path);
    let mut config = config_store::load_config(&config_path)?;
    args.apply(&mut config);

    if args.save_config {
        config_store::persist_config(&config_path, &config)?;
        if args.images.is_empty() {
            return Ok(());
        }
    }

    let batch = intake::read_images(&args.images)?;
    let mut session = StitchSession::new(
        Compositor::from_config(&config),
        config.settings,
        Box::new(LogNotifier),
    );

    session.add_images(batch).await?;
    if session.output().is_none() {
        // Fewer than 2 usable images: reports and returns the error.
        session.stitch()?;
    }

    let out_dir = config.output_dir.unwrap_or_else(|| PathBuf::from("."));
    let path = session.export(&out_dir)?;
    info!(path = %path.display(), "done");
    println!("{}", path.display());
    Ok(())
}
