//! gamut - HDR-to-SDR gamut-map shader composition CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "gamut")]
#[command(author, version, about = "Compose and inspect HDR-to-SDR gamut-map shaders")]
#[command(long_about = "
Generates GLSL for the gamut-mapping stage of an HDR-to-SDR pipeline and
composes it into complete, compilable fragment shaders.

Examples:
  gamut list                                  # Show available strategies
  gamut emit                                  # Full shader, clip strategy
  gamut emit -s soft-clip --knee 0.85         # Soft-clip with custom knee
  gamut emit -s desaturate -o shader.frag     # Write to file
  gamut emit --fragment-only                  # Function definitions only
  gamut apply 1.5,0.5,-0.2 --identity         # CPU reference, no conversion
  gamut apply 1.0,0.0,0.0 -s desaturate       # Full BT.2020 -> BT.709 path
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit a composed GLSL shader
    #[command(visible_alias = "e")]
    Emit(commands::emit::EmitArgs),

    /// List strategies and conversions
    #[command(visible_alias = "ls")]
    List(commands::list::ListArgs),

    /// Run the CPU reference on an RGB triple
    Apply(commands::apply::ApplyArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Emit(args) => commands::emit::run(args, cli.verbose),
        Commands::List(args) => commands::list::run(args, cli.verbose),
        Commands::Apply(args) => commands::apply::run(args, cli.verbose),
    }
}

/// Stderr logging; RUST_LOG overrides the verbosity flag.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
