use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mosaic::codec;
use mosaic::config::MosaicConfig;
use mosaic::processing::Style;
use mosaic::scale::{extract_column, flip, FirResampler, ResamplerProfile, ScaleEngine};
use mosaic::session::MosaicSession;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Multi-pass image scaling and frame mosaics:
/// - scale, flip or slice single images
/// - assemble many frames into one barcode strip or thumbnail grid
#[derive(Parser, Debug)]
#[command(name = "mosaic")]
#[command(about = "Scale images and assemble frame mosaics")]
#[command(long_about = "Scale images with a multi-pass area filter and assemble sequences of frames
into barcode strips or thumbnail grids. Output is always PNG.")]
struct Args {
    /// Log every scaling pass
    #[arg(short, long, global = true, help = "Enable debug logging (RUST_LOG overrides)")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resize one image
    Scale {
        input: PathBuf,
        output: PathBuf,
        #[arg(long)]
        width: u32,
        #[arg(long)]
        height: u32,
        #[arg(long, value_enum, default_value_t = ResamplerProfile::Modern)]
        profile: ResamplerProfile,
    },
    /// Transpose one image
    Flip { input: PathBuf, output: PathBuf },
    /// Cut a single column out of an image
    Column {
        input: PathBuf,
        output: PathBuf,
        #[arg(long, default_value_t = 0.5, help = "Horizontal position in [0, 1)")]
        at: f64,
    },
    /// Assemble frames into a mosaic
    Build {
        output: PathBuf,
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        #[arg(long, default_value_t = 1000)]
        width: u32,
        #[arg(long, default_value_t = 150)]
        height: u32,
        #[arg(long, value_enum, default_value_t = Style::Horizontal)]
        style: Style,
        #[arg(long, default_value_t = 4, help = "Grid columns for the thumbnails style")]
        columns: u32,
        #[arg(long, default_value_t = 0, help = "Fill value for unused canvas")]
        background: u8,
        #[arg(long, value_enum, default_value_t = ResamplerProfile::Modern)]
        profile: ResamplerProfile,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Scale {
            input,
            output,
            width,
            height,
            profile,
        } => {
            let src = codec::read_image(&input)?;
            let mut engine =
                ScaleEngine::new(FirResampler::with_capabilities(profile.capabilities()));
            let out = engine
                .scale(&src, width, height)
                .with_context(|| format!("scaling {} to {width}x{height}", input.display()))?;
            codec::write_png(&out, &output)?;
            info!(output = %output.display(), width, height, "scaled image");
        }
        Command::Flip { input, output } => {
            let src = codec::read_image(&input)?;
            let out = flip(&src).with_context(|| format!("flipping {}", input.display()))?;
            codec::write_png(&out, &output)?;
        }
        Command::Column { input, output, at } => {
            if !(0.0..1.0).contains(&at) {
                anyhow::bail!("--at must be in [0, 1), got {at}");
            }
            let src = codec::read_image(&input)?;
            let out = extract_column(&src, at)
                .with_context(|| format!("extracting column from {}", input.display()))?;
            codec::write_png(&out, &output)?;
        }
        Command::Build {
            output,
            inputs,
            width,
            height,
            style,
            columns,
            background,
            profile,
        } => {
            let config = MosaicConfig::new(width, height, style, columns, background, profile);
            config.validate().map_err(anyhow::Error::msg)?;
            let summary = MosaicSession::new(config)
                .run(&inputs, &output)
                .context("building mosaic")?;
            info!(
                frames = summary.frames,
                skipped = summary.skipped,
                output = %summary.output.display(),
                "mosaic written"
            );
        }
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
