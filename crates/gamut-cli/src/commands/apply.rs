//! Apply command.
//!
//! Runs the CPU reference of a strategy on a single RGB triple. Useful
//! for checking shader math without a GPU in the loop.

use anyhow::Result;
use clap::Args;
use glam::Mat3;
use tracing::debug;

use super::{parse_rgb, resolve_conversion, resolve_strategy};

/// Arguments for the `apply` command.
#[derive(Args)]
pub struct ApplyArgs {
    /// Input color as R,G,B (e.g. "1.5,0.5,-0.2")
    pub color: String,

    /// Gamut-map strategy
    #[arg(short, long, default_value = "clip")]
    pub strategy: String,

    /// Shoulder start for soft-clip, in [0, 0.99]
    #[arg(long)]
    pub knee: Option<f32>,

    /// Conversion function (GLSL name)
    #[arg(short, long, default_value = "bt2020ToBt709")]
    pub conversion: String,

    /// Skip the color-space conversion (identity matrix)
    #[arg(long)]
    pub identity: bool,
}

/// Run the apply command.
pub fn run(args: ApplyArgs, verbose: bool) -> Result<()> {
    let rgb = parse_rgb(&args.color)?;
    let strategy = resolve_strategy(&args.strategy, args.knee)?;
    let matrix = if args.identity {
        Mat3::IDENTITY
    } else {
        resolve_conversion(&args.conversion)?.matrix()
    };
    debug!(%strategy, input = ?rgb, "applying reference");

    let out = strategy.apply(rgb, matrix);
    if verbose {
        let converted = matrix * rgb;
        println!("input:     {:.6}, {:.6}, {:.6}", rgb.x, rgb.y, rgb.z);
        println!(
            "converted: {:.6}, {:.6}, {:.6}",
            converted.x, converted.y, converted.z
        );
        println!("mapped:    {:.6}, {:.6}, {:.6}", out.x, out.y, out.z);
    } else {
        println!("{:.6}, {:.6}, {:.6}", out.x, out.y, out.z);
    }
    Ok(())
}
