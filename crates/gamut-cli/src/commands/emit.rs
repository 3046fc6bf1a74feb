//! Emit command.
//!
//! Composes the conversion and gamut-map fragments into GLSL and writes
//! the result to stdout or a file.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::debug;

use gamut_glsl::{ShaderComposer, ShaderHeader, GAMUT_MAP};

use super::{resolve_conversion, resolve_strategy, write_output};

/// Arguments for the `emit` command.
#[derive(Args)]
pub struct EmitArgs {
    /// Gamut-map strategy
    #[arg(short, long, default_value = "clip")]
    pub strategy: String,

    /// Shoulder start for soft-clip, in [0, 0.99]
    #[arg(long)]
    pub knee: Option<f32>,

    /// Conversion function (GLSL name)
    #[arg(short, long, default_value = "bt2020ToBt709")]
    pub conversion: String,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit function definitions only, without header and main()
    #[arg(long)]
    pub fragment_only: bool,

    /// GLSL #version directive payload
    #[arg(long, default_value = "300 es")]
    pub glsl_version: String,

    /// Default float precision qualifier
    #[arg(long, default_value = "highp")]
    pub precision: String,
}

/// Run the emit command.
pub fn run(args: EmitArgs, _verbose: bool) -> Result<()> {
    let strategy = resolve_strategy(&args.strategy, args.knee)?;
    let conversion = resolve_conversion(&args.conversion)?;
    debug!(%strategy, %conversion, "composing shader");

    let mut composer = ShaderComposer::new();
    composer.register(conversion.fragment())?;
    composer.register(strategy.code_for(conversion))?;

    let glsl = if args.fragment_only {
        let mut body = composer.assemble(GAMUT_MAP)?;
        body.push('\n');
        body
    } else {
        let header = ShaderHeader {
            version: args.glsl_version,
            precision: args.precision,
        };
        composer.assemble_program(GAMUT_MAP, &header)?
    };

    write_output(args.output.as_deref(), &glsl)
}
