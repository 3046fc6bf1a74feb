//! List command.
//!
//! Prints the available gamut-map strategies and conversion directions.

use anyhow::Result;
use clap::Args;

use gamut_glsl::{Conversion, GamutMap};

/// Arguments for the `list` command.
#[derive(Args)]
pub struct ListArgs {
    /// Show the GLSL each strategy emits
    #[arg(long)]
    pub code: bool,
}

/// Run the list command.
pub fn run(args: ListArgs, _verbose: bool) -> Result<()> {
    println!("Strategies:");
    for strategy in GamutMap::ALL {
        println!("  {:<12} {}", strategy.name(), strategy.description());
        if args.code {
            for line in strategy.code().source().lines() {
                println!("      {line}");
            }
        }
    }

    println!();
    println!("Conversions:");
    for conversion in Conversion::ALL {
        println!("  {:<20} {}", conversion.name(), conversion);
    }

    Ok(())
}
