//! `imgasm` CLI - Convert an image into a MIPS `.word` data declaration.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use imgasm_core::{convert_with, FilterType, LoadOptions};

/// Convert an image into an assembly `.word` declaration of 0x00RRGGBB pixels.
#[derive(Parser, Debug)]
#[command(name = "imgasm")]
#[command(version, about, long_about = None)]
struct Args {
    /// Source image path.
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Target width in pixels.
    #[arg(short = 'W', long, value_name = "INT", value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Target height in pixels.
    #[arg(short = 'H', long, value_name = "INT", value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Resampling filter.
    #[arg(short, long, value_enum, default_value_t = Filter::CatmullRom)]
    filter: Filter,

    /// Apply the EXIF orientation tag before resampling.
    #[arg(long)]
    orient: bool,

    /// Write the declaration to this file instead of stdout.
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Filter {
    Nearest,
    Bilinear,
    CatmullRom,
    Lanczos3,
}

impl From<Filter> for FilterType {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::Nearest => FilterType::Nearest,
            Filter::Bilinear => FilterType::Bilinear,
            Filter::CatmullRom => FilterType::CatmullRom,
            Filter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl Args {
    fn load_options(&self) -> LoadOptions {
        LoadOptions::new()
            .with_filter(self.filter.into())
            .with_orientation(self.orient)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so stdout only carries the declaration
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("imgasm={log_level},imgasm_core={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    let doc = convert_with(&args.input, args.width, args.height, &args.load_options())
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            doc.write_to(BufWriter::new(file))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(
                "Wrote {} words ({}x{}) to {}",
                doc.word_count(),
                doc.width(),
                doc.height(),
                path.display()
            );
        }
        None => doc
            .write_to(io::stdout().lock())
            .context("Failed to write to stdout")?,
    }

    Ok(())
}
