//! # gamut-primaries
//!
//! Color primaries, white points, and RGB-RGB matrix generation for the
//! video gamuts involved in HDR-to-SDR mapping.
//!
//! Each color space is defined by the CIE xy chromaticities of its RGB
//! primaries and white point; conversion matrices between spaces are
//! derived through CIE XYZ using the standard white-point-scaling method.
//!
//! # Included Color Spaces
//!
//! | Color Space | Gamut Size | Primary Use |
//! |-------------|------------|-------------|
//! | BT.709 / sRGB | Small | SDR video, HDTV |
//! | Display P3 | Medium | Wide-gamut displays |
//! | BT.2020 | Large | UHDTV, HDR video |
//!
//! # Usage
//!
//! ```rust
//! use gamut_primaries::{BT2020, BT709, rgb_to_rgb_matrix};
//! use glam::Vec3;
//!
//! let m = rgb_to_rgb_matrix(&BT2020, &BT709);
//!
//! // Both spaces share the D65 white point, so white maps to white.
//! let white = m * Vec3::ONE;
//! assert!((white.x - 1.0).abs() < 1e-3);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - Matrix and vector math
//!
//! # Used By
//!
//! - `gamut-glsl` - Conversion-fragment generation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use glam::{Mat3, Vec3};

/// RGB color space primaries definition.
///
/// Defines a color space by its three primary colors (R, G, B) and white
/// point, all specified as CIE xy chromaticity coordinates.
///
/// # Example
///
/// ```rust
/// use gamut_primaries::Primaries;
///
/// let my_space = Primaries {
///     r: (0.64, 0.33),
///     g: (0.30, 0.60),
///     b: (0.15, 0.06),
///     w: (0.3127, 0.3290),
///     name: "Custom",
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y) chromaticity
    pub r: (f32, f32),
    /// Green primary (x, y) chromaticity
    pub g: (f32, f32),
    /// Blue primary (x, y) chromaticity
    pub b: (f32, f32),
    /// White point (x, y) chromaticity
    pub w: (f32, f32),
    /// Color space name
    pub name: &'static str,
}

impl Primaries {
    /// White point as XYZ (Y=1).
    #[inline]
    pub fn white_xyz(&self) -> Vec3 {
        xy_to_xyz(self.w.0, self.w.1)
    }
}

// ============================================================================
// Standard White Points
// ============================================================================

/// D65 white point chromaticity (daylight, ~6500K).
///
/// Shared by BT.709, BT.2020, and Display P3, which makes the conversions
/// in this workspace pure 3x3 matrices with no chromatic adaptation step.
pub const D65_XY: (f32, f32) = (0.31270, 0.32900);

// ============================================================================
// Standard Color Space Primaries
// ============================================================================

/// BT.709 primaries (D65 white point).
///
/// The SDR video gamut; identical primaries to sRGB.
pub const BT709: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.3000, 0.6000),
    b: (0.1500, 0.0600),
    w: D65_XY,
    name: "BT.709",
};

/// sRGB primaries (identical to BT.709).
pub const SRGB: Primaries = BT709;

/// BT.2020 primaries (D65 white point).
///
/// Ultra HD TV color space with a much wider gamut than BT.709. HDR video
/// is commonly carried in BT.2020; mapping it down to BT.709 is what
/// produces the out-of-gamut values a gamut-map stage must handle.
pub const BT2020: Primaries = Primaries {
    r: (0.7080, 0.2920),
    g: (0.1700, 0.7970),
    b: (0.1310, 0.0460),
    w: D65_XY,
    name: "BT.2020",
};

/// Display P3 primaries (D65 white point).
///
/// DCI-P3 primaries with a D65 white point, as used by wide-gamut
/// consumer displays.
pub const DISPLAY_P3: Primaries = Primaries {
    r: (0.6800, 0.3200),
    g: (0.2650, 0.6900),
    b: (0.1500, 0.0600),
    w: D65_XY,
    name: "Display P3",
};

// ============================================================================
// Matrix Generation
// ============================================================================

/// Converts xy chromaticity to XYZ (with Y=1).
fn xy_to_xyz(x: f32, y: f32) -> Vec3 {
    if y.abs() < 1e-10 {
        Vec3::ZERO
    } else {
        Vec3::new(x / y, 1.0, (1.0 - x - y) / y)
    }
}

/// Inverts a matrix, falling back to identity for a singular input.
fn safe_inverse(m: Mat3) -> Mat3 {
    if m.determinant().abs() < 1e-10 {
        Mat3::IDENTITY
    } else {
        m.inverse()
    }
}

/// Computes the RGB to XYZ matrix for a set of primaries.
///
/// # Algorithm
///
/// 1. Convert xy chromaticities to XYZ (with Y=1)
/// 2. Compute scaling factors so white point maps correctly
/// 3. Multiply primaries by scaling factors
///
/// # Example
///
/// ```rust
/// use gamut_primaries::{BT709, rgb_to_xyz_matrix};
/// use glam::Vec3;
///
/// let m = rgb_to_xyz_matrix(&BT709);
///
/// // White (1,1,1) maps to the white point XYZ with Y normalized to 1
/// let white = m * Vec3::ONE;
/// assert!((white.y - 1.0).abs() < 0.001);
/// ```
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Mat3 {
    // Convert primaries from xy to XYZ
    let r_xyz = xy_to_xyz(primaries.r.0, primaries.r.1);
    let g_xyz = xy_to_xyz(primaries.g.0, primaries.g.1);
    let b_xyz = xy_to_xyz(primaries.b.0, primaries.b.1);
    let w_xyz = xy_to_xyz(primaries.w.0, primaries.w.1);

    // Build matrix from primaries as columns
    let m = Mat3::from_cols(r_xyz, g_xyz, b_xyz);

    // Solve for scaling factors: M * S = W
    let s = safe_inverse(m) * w_xyz;

    // Scale each column by the corresponding factor
    Mat3::from_cols(r_xyz * s.x, g_xyz * s.y, b_xyz * s.z)
}

/// Computes the XYZ to RGB matrix for a set of primaries.
///
/// This is the inverse of [`rgb_to_xyz_matrix`].
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> Mat3 {
    safe_inverse(rgb_to_xyz_matrix(primaries))
}

/// Computes a matrix to convert from one RGB color space to another.
///
/// The conversion goes through XYZ: `RGB_src -> XYZ -> RGB_dst`
///
/// # Note
///
/// This does NOT include chromatic adaptation. All spaces in this crate
/// share the D65 white point, so none is needed here.
///
/// # Example
///
/// ```rust
/// use gamut_primaries::{BT2020, BT709, rgb_to_rgb_matrix};
///
/// let bt2020_to_bt709 = rgb_to_rgb_matrix(&BT2020, &BT709);
/// ```
pub fn rgb_to_rgb_matrix(src: &Primaries, dst: &Primaries) -> Mat3 {
    xyz_to_rgb_matrix(dst) * rgb_to_xyz_matrix(src)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_white_point_normalized() {
        let m = rgb_to_xyz_matrix(&BT709);
        let white = m * Vec3::ONE;

        // Y should be 1.0
        assert_relative_eq!(white.y, 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_bt709_matrix_known_values() {
        let m = rgb_to_xyz_matrix(&BT709);

        // Published sRGB/BT.709 to XYZ (D65) values
        assert_relative_eq!(m.col(0).x, 0.4124564, epsilon = 1e-3);
        assert_relative_eq!(m.col(0).y, 0.2126729, epsilon = 1e-3);
        assert_relative_eq!(m.col(2).z, 0.9503041, epsilon = 1e-3);
    }

    #[test]
    fn test_bt2020_to_bt709_known_values() {
        // Reference values from ITU-R BT.2407
        let m = rgb_to_rgb_matrix(&BT2020, &BT709);
        assert_relative_eq!(m.col(0).x, 1.6605, epsilon = 2e-3);
        assert_relative_eq!(m.col(1).x, -0.5876, epsilon = 2e-3);
        assert_relative_eq!(m.col(2).x, -0.0728, epsilon = 2e-3);
        assert_relative_eq!(m.col(1).y, 1.1329, epsilon = 2e-3);
        assert_relative_eq!(m.col(2).z, 1.1187, epsilon = 2e-3);
    }

    #[test]
    fn test_xyz_roundtrip() {
        let to_xyz = rgb_to_xyz_matrix(&BT2020);
        let to_rgb = xyz_to_rgb_matrix(&BT2020);

        let rgb = Vec3::new(0.5, 0.3, 0.8);
        let back = to_rgb * (to_xyz * rgb);

        assert_relative_eq!(rgb.x, back.x, epsilon = 1e-4);
        assert_relative_eq!(rgb.y, back.y, epsilon = 1e-4);
        assert_relative_eq!(rgb.z, back.z, epsilon = 1e-4);
    }

    #[test]
    fn test_rgb_to_rgb_identity() {
        let m = rgb_to_rgb_matrix(&BT709, &BT709);

        // Should be identity
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(m.col(i)[j], expected, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn test_white_maps_to_white() {
        // Same white point on both sides, so (1,1,1) -> (1,1,1)
        let m = rgb_to_rgb_matrix(&BT2020, &BT709);
        let white = m * Vec3::ONE;
        assert_relative_eq!(white.x, 1.0, epsilon = 1e-3);
        assert_relative_eq!(white.y, 1.0, epsilon = 1e-3);
        assert_relative_eq!(white.z, 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_conversion_roundtrip() {
        let down = rgb_to_rgb_matrix(&BT2020, &BT709);
        let up = rgb_to_rgb_matrix(&BT709, &BT2020);

        let rgb = Vec3::new(0.9, 0.2, 0.4);
        let back = up * (down * rgb);

        assert_relative_eq!(rgb.x, back.x, epsilon = 1e-4);
        assert_relative_eq!(rgb.y, back.y, epsilon = 1e-4);
        assert_relative_eq!(rgb.z, back.z, epsilon = 1e-4);
    }
}
