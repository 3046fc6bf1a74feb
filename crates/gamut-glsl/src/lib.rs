//! # gamut-glsl
//!
//! GLSL fragment generators and the shader composer for the HDR-to-SDR
//! gamut-mapping stage of a video pipeline.
//!
//! HDR video is commonly carried in BT.2020; SDR displays want BT.709.
//! The conversion matrix pushes saturated colors outside [0, 1], and a
//! gamut-map strategy decides what happens to them. This crate generates
//! the GLSL for that decision and assembles it into compilable source:
//!
//! - [`Conversion`] - color-space conversion fragments (`bt2020ToBt709`, ...)
//! - [`GamutMap`] - gamut-map strategy fragments (`gamutMap`)
//! - [`ShaderComposer`] - name-checked, dependency-ordered assembly
//!
//! # Architecture
//!
//! ```text
//!   Conversion ──fragment──┐
//!                          ├──► ShaderComposer ──► complete GLSL source
//!   GamutMap ───fragment───┘
//! ```
//!
//! Composition is leaf-to-root: the conversion fragment is a leaf, the
//! gamut-map fragment calls it, and the composer emits them
//! dependencies-first so every call resolves at compile time.
//!
//! # Strategies
//!
//! | Strategy | Cost | Character |
//! |----------|------|-----------|
//! | [`GamutMap::Clip`] | Cheapest | Hard saturation, hue may shift |
//! | [`GamutMap::SoftClip`] | Cheap | Smooth shoulder above a knee |
//! | [`GamutMap::Desaturate`] | Cheap | Blends toward luma, preserves brightness |
//!
//! # Quick Start
//!
//! ```rust
//! use gamut_glsl::{Conversion, GamutMap, ShaderComposer, ShaderHeader, GAMUT_MAP};
//!
//! let mut composer = ShaderComposer::new();
//! composer.register(Conversion::Bt2020ToBt709.fragment())?;
//! composer.register(GamutMap::Clip.code())?;
//!
//! let glsl = composer.assemble_program(GAMUT_MAP, &ShaderHeader::default())?;
//! assert!(glsl.contains("vec3 gamutMap(vec3 color)"));
//! # Ok::<(), gamut_core::Error>(())
//! ```
//!
//! # Dependencies
//!
//! - [`gamut-core`] - Fragment and error types
//! - [`gamut-primaries`] - Conversion matrix derivation
//! - [`glam`] - CPU reference math
//!
//! # Used By
//!
//! - `gamut-cli` - Shader emission tool

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod compose;
pub mod convert;
pub mod gamutmap;

pub use compose::{ShaderComposer, ShaderHeader};
pub use convert::Conversion;
pub use gamutmap::{GamutMap, GAMUT_MAP};

// Re-export the shared data model and sub-crates for convenience
pub use gamut_core::{Error, FunctionName, Result, ShaderFragment};
pub use gamut_primaries as primaries;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        Conversion, GamutMap, ShaderComposer, ShaderHeader, GAMUT_MAP,
    };
    pub use gamut_core::{Error, FunctionName, Result, ShaderFragment};
    pub use gamut_primaries::{BT2020, BT709, DISPLAY_P3, rgb_to_rgb_matrix};
}
