//! Gamut-map strategy fragment generation.
//!
//! After a wide-to-narrow color-space conversion, saturated colors land
//! outside [0, 1]. A gamut-map strategy decides what the shader does with
//! them. Every strategy emits a fragment defining the same fixed function,
//! `vec3 gamutMap(vec3 color)`, named by the [`GAMUT_MAP`] constant, so
//! the assembler can swap strategies without touching any other fragment.
//!
//! Strategies are a closed set of tagged variants dispatched through
//! [`GamutMap::code`]. Generation is pure: the emitted source is a
//! function of the variant and the conversion's symbolic name only.
//!
//! Each variant also carries a CPU reference implementation
//! ([`GamutMap::apply`]) computing the same math as the emitted GLSL,
//! which is what the tests exercise.
//!
//! # Example
//!
//! ```rust
//! use gamut_glsl::{GamutMap, GAMUT_MAP};
//!
//! let frag = GamutMap::Clip.code();
//! assert_eq!(frag.name(), GAMUT_MAP);
//! assert!(frag.source().contains("clamp(color, 0.0, 1.0)"));
//! ```

use gamut_core::{Error, FunctionName, Result, ShaderFragment};
use glam::{Mat3, Vec3};

use crate::convert::Conversion;

/// Name of the gamut-map function every strategy defines.
///
/// The signature is always `vec3 gamutMap(vec3 color)`; the assembler can
/// call it without knowing which strategy produced the fragment.
pub const GAMUT_MAP: FunctionName = FunctionName::new("gamutMap");

/// BT.709 luma weights, as used by the Desaturate strategy.
const LUMA_WEIGHTS: Vec3 = Vec3::new(0.2126, 0.7152, 0.0722);

/// A gamut-map strategy.
///
/// Closed set of variants, cheapest first. All are deterministic,
/// branch-light, per-pixel value transforms with no uniforms.
///
/// | Variant | Out-of-range handling |
/// |---------|----------------------|
/// | [`Clip`](Self::Clip) | Hard clamp to [0, 1] |
/// | [`SoftClip`](Self::SoftClip) | Smooth shoulder above a knee |
/// | [`Desaturate`](Self::Desaturate) | Blend toward luma until in range |
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GamutMap {
    /// Clamp each channel to [0, 1] after conversion.
    ///
    /// The cheapest and least perceptually accurate policy: highly
    /// saturated colors lose hue as channels saturate independently.
    /// Exists as the baseline/fallback strategy.
    #[default]
    Clip,

    /// Pass values below `knee` through; compress the rest toward 1.
    ///
    /// Per-channel rational shoulder: continuous at the knee with unit
    /// slope, asymptotically approaching 1.0. Negative channels clamp
    /// to 0 first.
    SoftClip {
        /// Shoulder start, in [0, 1). Values below pass through unchanged.
        knee: f32,
    },

    /// Blend toward BT.709 luma until the peak channel reaches 1.
    ///
    /// Preserves brightness and hue direction at the cost of saturation.
    /// Negative channels clamp to 0 afterwards.
    Desaturate,
}

impl GamutMap {
    /// Default shoulder start for [`SoftClip`](Self::SoftClip).
    pub const DEFAULT_KNEE: f32 = 0.8;

    /// Largest accepted knee; keeps the shoulder denominator away from 0.
    pub const MAX_KNEE: f32 = 0.99;

    /// Every strategy, with default parameters.
    pub const ALL: [GamutMap; 3] = [
        GamutMap::Clip,
        GamutMap::SoftClip {
            knee: Self::DEFAULT_KNEE,
        },
        GamutMap::Desaturate,
    ];

    /// Creates a [`SoftClip`](Self::SoftClip) strategy, validating the knee.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if `knee` is not in `[0, MAX_KNEE]`.
    pub fn soft_clip(knee: f32) -> Result<Self> {
        if !knee.is_finite() || knee < 0.0 || knee > Self::MAX_KNEE {
            return Err(Error::invalid_parameter(
                "knee",
                knee,
                format!("must be in [0, {}]", Self::MAX_KNEE),
            ));
        }
        Ok(Self::SoftClip { knee })
    }

    /// Stable strategy identifier, as accepted by [`from_name`](Self::from_name).
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Clip => "clip",
            Self::SoftClip { .. } => "soft-clip",
            Self::Desaturate => "desaturate",
        }
    }

    /// One-line description for listings.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Clip => "hard clamp to [0, 1]; cheapest, hue may shift",
            Self::SoftClip { .. } => "smooth shoulder above a knee; gentle highlights",
            Self::Desaturate => "blend toward luma until in range; preserves brightness",
        }
    }

    /// Looks a strategy up by identifier, with default parameters.
    pub fn from_name(name: &str) -> Option<GamutMap> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Emits the gamut-map fragment for the standard HDR-to-SDR direction.
    ///
    /// Equivalent to `code_for(Conversion::Bt2020ToBt709)`.
    pub fn code(&self) -> ShaderFragment {
        self.code_for(Conversion::Bt2020ToBt709)
    }

    /// Emits the gamut-map fragment over the given conversion.
    ///
    /// The fragment defines `vec3 gamutMap(vec3 color)` and declares a
    /// single dependency: the conversion function it calls. Generation is
    /// total; an out-of-range knee is clamped into range rather than
    /// rejected here (validation belongs to [`soft_clip`](Self::soft_clip)).
    pub fn code_for(&self, conversion: Conversion) -> ShaderFragment {
        let convert = conversion.name();
        let source = match self {
            Self::Clip => format!(
                "vec3 {name}(vec3 color) {{\n\
                 \x20   color = {convert}(color);\n\
                 \x20   color = clamp(color, 0.0, 1.0);\n\
                 \x20   return color;\n\
                 }}",
                name = GAMUT_MAP,
            ),
            Self::SoftClip { knee } => {
                let knee = knee.clamp(0.0, Self::MAX_KNEE);
                format!(
                    "vec3 {name}(vec3 color) {{\n\
                     \x20   color = max({convert}(color), 0.0);\n\
                     \x20   vec3 over = max(color - {knee:.6}, 0.0);\n\
                     \x20   return min(color, vec3({knee:.6})) + over / (1.0 + over / {headroom:.6});\n\
                     }}",
                    name = GAMUT_MAP,
                    headroom = 1.0 - knee,
                )
            }
            Self::Desaturate => format!(
                "vec3 {name}(vec3 color) {{\n\
                 \x20   color = {convert}(color);\n\
                 \x20   float luma = dot(color, vec3({lr}, {lg}, {lb}));\n\
                 \x20   float peak = max(color.r, max(color.g, color.b));\n\
                 \x20   if (peak > 1.0 && peak > luma) {{\n\
                 \x20       color = mix(color, vec3(luma), (peak - 1.0) / (peak - luma));\n\
                 \x20   }}\n\
                 \x20   return clamp(color, 0.0, 1.0);\n\
                 }}",
                name = GAMUT_MAP,
                lr = LUMA_WEIGHTS.x,
                lg = LUMA_WEIGHTS.y,
                lb = LUMA_WEIGHTS.z,
            ),
        };
        ShaderFragment::new(GAMUT_MAP, source).with_call(convert)
    }

    /// CPU reference for the emitted GLSL.
    ///
    /// `convert` stands in for the conversion function (pass
    /// [`Mat3::IDENTITY`] to test the mapping in isolation, or
    /// [`Conversion::matrix`] for the full path).
    pub fn apply(&self, rgb: Vec3, convert: Mat3) -> Vec3 {
        let color = convert * rgb;
        match self {
            Self::Clip => color.clamp(Vec3::ZERO, Vec3::ONE),
            Self::SoftClip { knee } => {
                let knee = knee.clamp(0.0, Self::MAX_KNEE);
                let color = color.max(Vec3::ZERO);
                let over = (color - knee).max(Vec3::ZERO);
                color.min(Vec3::splat(knee)) + over / (1.0 + over / (1.0 - knee))
            }
            Self::Desaturate => {
                let luma = color.dot(LUMA_WEIGHTS);
                let peak = color.max_element();
                let color = if peak > 1.0 && peak > luma {
                    color.lerp(Vec3::splat(luma), (peak - 1.0) / (peak - luma))
                } else {
                    color
                };
                color.clamp(Vec3::ZERO, Vec3::ONE)
            }
        }
    }
}

impl std::fmt::Display for GamutMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SoftClip { knee } => write!(f, "soft-clip(knee={knee})"),
            other => f.write_str(other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_emitted_name_matches_constant() {
        for strategy in GamutMap::ALL {
            let frag = strategy.code();
            assert_eq!(frag.name(), GAMUT_MAP);
            assert_eq!(frag.name().as_str(), "gamutMap");
            assert!(frag.defines_declared_name());
            assert!(frag
                .source()
                .starts_with("vec3 gamutMap(vec3 color)"));
        }
    }

    #[test]
    fn test_fragment_declares_conversion_dependency() {
        let frag = GamutMap::Clip.code();
        assert_eq!(frag.calls(), &[Conversion::Bt2020ToBt709.name()]);
        assert!(frag.source().contains("bt2020ToBt709(color)"));

        let frag = GamutMap::Clip.code_for(Conversion::DisplayP3ToBt709);
        assert_eq!(frag.calls(), &[Conversion::DisplayP3ToBt709.name()]);
    }

    #[test]
    fn test_clip_scenario_mixed_range() {
        // (1.5, 0.5, -0.2) with identity conversion -> (1.0, 0.5, 0.0)
        let out = GamutMap::Clip.apply(Vec3::new(1.5, 0.5, -0.2), Mat3::IDENTITY);
        assert_eq!(out, Vec3::new(1.0, 0.5, 0.0));
    }

    #[test]
    fn test_clip_in_range_unchanged() {
        let out = GamutMap::Clip.apply(Vec3::new(0.2, 0.3, 0.4), Mat3::IDENTITY);
        assert_eq!(out, Vec3::new(0.2, 0.3, 0.4));
    }

    #[test]
    fn test_clip_saturates_exactly() {
        let out = GamutMap::Clip.apply(Vec3::new(7.5, -3.0, 1.0 + f32::EPSILON), Mat3::IDENTITY);
        assert_eq!(out.x, 1.0);
        assert_eq!(out.y, 0.0);
        assert_eq!(out.z, 1.0);
    }

    #[test]
    fn test_clip_full_path_stays_in_range() {
        // Pure BT.2020 red converts far outside BT.709; clip brings every
        // channel back into [0, 1].
        let m = Conversion::Bt2020ToBt709.matrix();
        let out = GamutMap::Clip.apply(Vec3::new(1.0, 0.0, 0.0), m);
        assert!(out.min_element() >= 0.0);
        assert!(out.max_element() <= 1.0);
        assert_eq!(out.x, 1.0);
    }

    #[test]
    fn test_soft_clip_below_knee_unchanged() {
        let strategy = GamutMap::SoftClip { knee: 0.8 };
        let out = strategy.apply(Vec3::new(0.2, 0.5, 0.79), Mat3::IDENTITY);
        assert_relative_eq!(out.x, 0.2, epsilon = 1e-6);
        assert_relative_eq!(out.y, 0.5, epsilon = 1e-6);
        assert_relative_eq!(out.z, 0.79, epsilon = 1e-6);
    }

    #[test]
    fn test_soft_clip_never_exceeds_one() {
        let strategy = GamutMap::SoftClip { knee: 0.8 };
        for v in [1.0, 1.5, 4.0, 100.0] {
            let out = strategy.apply(Vec3::splat(v), Mat3::IDENTITY);
            assert!(out.x < 1.0, "{v} mapped to {}", out.x);
            assert!(out.x > 0.8);
        }
    }

    #[test]
    fn test_soft_clip_monotonic() {
        let strategy = GamutMap::SoftClip { knee: 0.8 };
        let mut prev = -1.0_f32;
        for i in 0..100 {
            let v = i as f32 * 0.05;
            let out = strategy.apply(Vec3::splat(v), Mat3::IDENTITY).x;
            assert!(out >= prev);
            prev = out;
        }
    }

    #[test]
    fn test_soft_clip_clamps_negatives() {
        let strategy = GamutMap::SoftClip { knee: 0.8 };
        let out = strategy.apply(Vec3::new(-0.5, 0.5, 0.5), Mat3::IDENTITY);
        assert_eq!(out.x, 0.0);
    }

    #[test]
    fn test_soft_clip_validation() {
        assert!(GamutMap::soft_clip(0.0).is_ok());
        assert!(GamutMap::soft_clip(0.8).is_ok());
        assert!(GamutMap::soft_clip(1.0).is_err());
        assert!(GamutMap::soft_clip(-0.1).is_err());
        assert!(GamutMap::soft_clip(f32::NAN).is_err());
    }

    #[test]
    fn test_desaturate_in_gamut_unchanged() {
        let out = GamutMap::Desaturate.apply(Vec3::new(0.2, 0.3, 0.4), Mat3::IDENTITY);
        assert_eq!(out, Vec3::new(0.2, 0.3, 0.4));
    }

    #[test]
    fn test_desaturate_brings_peak_to_one() {
        let out = GamutMap::Desaturate.apply(Vec3::new(1.5, 0.5, 0.2), Mat3::IDENTITY);
        assert!(out.max_element() <= 1.0 + 1e-6);
        assert_relative_eq!(out.x, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_desaturate_preserves_luma() {
        let input = Vec3::new(1.4, 0.6, 0.3);
        let luma_in = input.dot(LUMA_WEIGHTS);
        let out = GamutMap::Desaturate.apply(input, Mat3::IDENTITY);
        let luma_out = out.dot(LUMA_WEIGHTS);
        assert_relative_eq!(luma_in, luma_out, epsilon = 1e-5);
    }

    #[test]
    fn test_registry_roundtrip() {
        for strategy in GamutMap::ALL {
            assert_eq!(GamutMap::from_name(strategy.name()), Some(strategy));
        }
        assert_eq!(GamutMap::from_name("perceptual"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(GamutMap::Clip.to_string(), "clip");
        assert_eq!(
            GamutMap::SoftClip { knee: 0.8 }.to_string(),
            "soft-clip(knee=0.8)"
        );
    }
}
