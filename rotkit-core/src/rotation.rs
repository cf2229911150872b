/// Forward rotation builders: angle parameters in degrees to 3x3 rotation matrices
use std::fmt;
use std::str::FromStr;

use nalgebra::{Matrix3, Vector3};

use crate::axis::Axis;
use crate::error::RotationError;

/// Fixed angles about world X, then Y, then Z.
///
/// `angles` is `[γ, β, α]` (X, Y, Z) and the result is `Rz(α) · Ry(β) · Rx(γ)`.
pub fn rotation_xyz_fixed(angles: [f64; 3]) -> Matrix3<f64> {
    let [gamma, beta, alpha] = angles;
    Axis::Z.rotation(alpha) * Axis::Y.rotation(beta) * Axis::X.rotation(gamma)
}

/// Euler angles about the body's Z, then new Y, then new X.
///
/// `angles` is `[α, β, γ]` (Z, Y, X). Reading the fixed-angle sequence in
/// reverse gives the same product, so this is numerically the XYZ fixed
/// rotation with the input order reversed: `Rz(α) · Ry(β) · Rx(γ)`.
pub fn rotation_zyx_euler(angles: [f64; 3]) -> Matrix3<f64> {
    let [alpha, beta, gamma] = angles;
    Axis::Z.rotation(alpha) * Axis::Y.rotation(beta) * Axis::X.rotation(gamma)
}

/// Euler angles about Z, then new Y, then new Z: `Rz(α) · Ry(β) · Rz(γ)`.
pub fn rotation_zyz_euler(angles: [f64; 3]) -> Matrix3<f64> {
    let [alpha, beta, gamma] = angles;
    Axis::Z.rotation(alpha) * Axis::Y.rotation(beta) * Axis::Z.rotation(gamma)
}

/// Rodrigues rotation of `degrees` about `axis`.
///
/// `axis` must already be unit length. A non-unit axis is not detected and
/// yields a matrix that is not orthonormal; use
/// [`AxisAngle::new`](crate::AxisAngle::new) to normalize untrusted input.
pub fn rotation_axis_angle(axis: &Vector3<f64>, degrees: f64) -> Matrix3<f64> {
    let (s, c) = degrees.to_radians().sin_cos();
    let v = 1.0 - c;
    let (kx, ky, kz) = (axis.x, axis.y, axis.z);

    Matrix3::new(
        kx * kx * v + c,
        kx * ky * v - kz * s,
        kx * kz * v + ky * s,
        ky * kx * v + kz * s,
        ky * ky * v + c,
        ky * kz * v - kx * s,
        kz * kx * v - ky * s,
        kz * ky * v + kx * s,
        kz * kz * v + c,
    )
}

/// Three-angle rotation conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
    /// `[γ, β, α]` about fixed X, Y, Z
    XyzFixed,
    /// `[α, β, γ]` about moving Z, Y, X
    ZyxEuler,
    /// `[α, β, γ]` about moving Z, Y, Z
    ZyzEuler,
}

impl Convention {
    pub const ALL: [Convention; 3] = [
        Convention::XyzFixed,
        Convention::ZyxEuler,
        Convention::ZyzEuler,
    ];

    pub fn build(self, angles: [f64; 3]) -> Matrix3<f64> {
        match self {
            Convention::XyzFixed => rotation_xyz_fixed(angles),
            Convention::ZyxEuler => rotation_zyx_euler(angles),
            Convention::ZyzEuler => rotation_zyz_euler(angles),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Convention::XyzFixed => "XYZ fixed",
            Convention::ZyxEuler => "ZYX Euler",
            Convention::ZyzEuler => "ZYZ Euler",
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Convention {
    type Err = RotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xyz" => Ok(Convention::XyzFixed),
            "zyx" => Ok(Convention::ZyxEuler),
            "zyz" => Ok(Convention::ZyzEuler),
            _ => Err(RotationError::parse("one of xyz, zyx, zyz", s)),
        }
    }
}
