//! CLI command implementations

pub mod apply;
pub mod emit;
pub mod list;

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use glam::Vec3;

use gamut_glsl::{Conversion, GamutMap};

/// Resolve a strategy by name, applying an optional knee override.
pub fn resolve_strategy(name: &str, knee: Option<f32>) -> Result<GamutMap> {
    let strategy = GamutMap::from_name(name).ok_or_else(|| {
        anyhow!(
            "unknown strategy '{}' (available: {})",
            name,
            strategy_names().join(", ")
        )
    })?;
    match (strategy, knee) {
        (GamutMap::SoftClip { .. }, Some(knee)) => {
            GamutMap::soft_clip(knee).context("invalid --knee")
        }
        (_, Some(_)) => bail!("--knee only applies to the soft-clip strategy"),
        (strategy, None) => Ok(strategy),
    }
}

/// Resolve a conversion by its GLSL function name.
pub fn resolve_conversion(name: &str) -> Result<Conversion> {
    Conversion::from_name(name).ok_or_else(|| {
        anyhow!(
            "unknown conversion '{}' (available: {})",
            name,
            conversion_names().join(", ")
        )
    })
}

/// Strategy identifiers, for error messages and listings.
pub fn strategy_names() -> Vec<&'static str> {
    GamutMap::ALL.iter().map(|s| s.name()).collect()
}

/// Conversion function names, for error messages and listings.
pub fn conversion_names() -> Vec<&'static str> {
    Conversion::ALL.iter().map(|c| c.name().as_str()).collect()
}

/// Parse an `R,G,B` triple.
pub fn parse_rgb(s: &str) -> Result<Vec3> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        bail!("expected R,G,B (got '{s}')");
    }
    let mut channels = [0.0_f32; 3];
    for (channel, part) in channels.iter_mut().zip(&parts) {
        *channel = part
            .parse()
            .with_context(|| format!("invalid channel value '{part}'"))?;
    }
    Ok(Vec3::from_array(channels))
}

/// Write text to a file, or stdout when no path is given.
pub fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("failed to write: {}", path.display())),
        None => {
            print!("{text}");
            Ok(())
        }
    }
}
