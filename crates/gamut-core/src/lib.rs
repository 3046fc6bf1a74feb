//! # gamut-core
//!
//! Core types for GLSL shader-fragment composition.
//!
//! A shader-assembly pipeline builds a complete GLSL program out of small
//! source fragments, each defining one callable function. This crate holds
//! the data model shared by every generator and by the composer:
//!
//! - [`FunctionName`] - typed symbolic name of a GLSL function
//! - [`ShaderFragment`] - one immutable fragment of GLSL source
//! - [`Error`] / [`Result`] - composition failure modes
//!
//! # Usage
//!
//! ```rust
//! use gamut_core::{FunctionName, ShaderFragment};
//!
//! const SCALE: FunctionName = FunctionName::new("scaleHalf");
//!
//! let fragment = ShaderFragment::new(
//!     SCALE,
//!     "vec3 scaleHalf(vec3 color) {\n    return color * 0.5;\n}",
//! );
//! assert_eq!(fragment.name(), SCALE);
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - Derive macro error implementation
//!
//! # Used By
//!
//! - `gamut-glsl` - Fragment generators and the shader composer
//! - `gamut-cli` - Shader emission tool

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod fragment;

pub use error::{Error, Result};
pub use fragment::{FunctionName, ShaderFragment};
