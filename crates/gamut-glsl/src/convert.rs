//! Color-space conversion fragment generation.
//!
//! Each [`Conversion`] direction owns exactly one [`FunctionName`] and
//! emits a GLSL fragment of the form `vec3 <name>(vec3 color)` that
//! multiplies by the conversion matrix. The matrix is derived from
//! chromaticities at generation time and baked into the source as a
//! `mat3` literal, so the emitted fragment has no uniforms and no
//! dependencies.
//!
//! The enum is the single owner of every conversion name: downstream
//! generators reference [`Conversion::name`] instead of repeating string
//! literals, which makes a name mismatch between generator and composer
//! unrepresentable.
//!
//! # Example
//!
//! ```rust
//! use gamut_glsl::Conversion;
//!
//! let frag = Conversion::Bt2020ToBt709.fragment();
//! assert!(frag.source().starts_with("vec3 bt2020ToBt709(vec3 color)"));
//! assert!(frag.calls().is_empty());
//! ```

use gamut_core::{FunctionName, ShaderFragment};
use gamut_primaries::{rgb_to_rgb_matrix, Primaries, BT2020, BT709, DISPLAY_P3};
use glam::{Mat3, Vec3};

/// Name of the BT.2020 to BT.709 conversion function.
pub const BT2020_TO_BT709: FunctionName = FunctionName::new("bt2020ToBt709");

/// Name of the BT.709 to BT.2020 conversion function.
pub const BT709_TO_BT2020: FunctionName = FunctionName::new("bt709ToBt2020");

/// Name of the Display P3 to BT.709 conversion function.
pub const DISPLAY_P3_TO_BT709: FunctionName = FunctionName::new("displayP3ToBt709");

/// Name of the BT.2020 to Display P3 conversion function.
pub const BT2020_TO_DISPLAY_P3: FunctionName = FunctionName::new("bt2020ToDisplayP3");

/// A color-space conversion direction.
///
/// The closed set of conversions this pipeline can emit. The HDR-to-SDR
/// direction is [`Bt2020ToBt709`](Conversion::Bt2020ToBt709); the others
/// exist for round-trips and wide-gamut display targets.
///
/// All involved spaces share the D65 white point, so every conversion is
/// a pure 3x3 matrix with no adaptation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Conversion {
    /// BT.2020 (HDR container) to BT.709 (SDR target).
    #[default]
    Bt2020ToBt709,
    /// BT.709 back up to BT.2020.
    Bt709ToBt2020,
    /// Display P3 to BT.709.
    DisplayP3ToBt709,
    /// BT.2020 to Display P3.
    Bt2020ToDisplayP3,
}

impl Conversion {
    /// Every supported conversion direction.
    pub const ALL: [Conversion; 4] = [
        Conversion::Bt2020ToBt709,
        Conversion::Bt709ToBt2020,
        Conversion::DisplayP3ToBt709,
        Conversion::Bt2020ToDisplayP3,
    ];

    /// The GLSL function name this conversion defines.
    #[inline]
    pub const fn name(&self) -> FunctionName {
        match self {
            Self::Bt2020ToBt709 => BT2020_TO_BT709,
            Self::Bt709ToBt2020 => BT709_TO_BT2020,
            Self::DisplayP3ToBt709 => DISPLAY_P3_TO_BT709,
            Self::Bt2020ToDisplayP3 => BT2020_TO_DISPLAY_P3,
        }
    }

    /// Source color space primaries.
    pub const fn src(&self) -> &'static Primaries {
        match self {
            Self::Bt2020ToBt709 | Self::Bt2020ToDisplayP3 => &BT2020,
            Self::Bt709ToBt2020 => &BT709,
            Self::DisplayP3ToBt709 => &DISPLAY_P3,
        }
    }

    /// Destination color space primaries.
    pub const fn dst(&self) -> &'static Primaries {
        match self {
            Self::Bt2020ToBt709 | Self::DisplayP3ToBt709 => &BT709,
            Self::Bt709ToBt2020 => &BT2020,
            Self::Bt2020ToDisplayP3 => &DISPLAY_P3,
        }
    }

    /// The conversion matrix, derived from chromaticities.
    pub fn matrix(&self) -> Mat3 {
        rgb_to_rgb_matrix(self.src(), self.dst())
    }

    /// CPU reference for the emitted GLSL: applies the conversion matrix.
    #[inline]
    pub fn apply(&self, rgb: Vec3) -> Vec3 {
        self.matrix() * rgb
    }

    /// Emits the GLSL fragment defining this conversion function.
    ///
    /// The matrix is written as a column-major `mat3` literal with 8
    /// significant digits. The fragment is a leaf: it calls nothing.
    pub fn fragment(&self) -> ShaderFragment {
        let source = format!(
            "vec3 {name}(vec3 color) {{\n    return {matrix} * color;\n}}",
            name = self.name(),
            matrix = mat3_literal(self.matrix(), "    "),
        );
        ShaderFragment::new(self.name(), source)
    }

    /// Looks a conversion up by its GLSL function name.
    pub fn from_name(name: &str) -> Option<Conversion> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().as_str() == name)
    }
}

impl std::fmt::Display for Conversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.src().name, self.dst().name)
    }
}

/// Formats a matrix as a GLSL `mat3(..)` literal.
///
/// GLSL `mat3` constructors fill column-major, matching
/// [`Mat3::to_cols_array`], so values are written in that order directly.
fn mat3_literal(m: Mat3, indent: &str) -> String {
    let c = m.to_cols_array();
    format!(
        "mat3(\n\
         {indent}    {:.8}, {:.8}, {:.8},\n\
         {indent}    {:.8}, {:.8}, {:.8},\n\
         {indent}    {:.8}, {:.8}, {:.8}\n\
         {indent})",
        c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7], c[8],
    )
}
