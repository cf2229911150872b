/// Inverse problem: recover angle parameters from a rotation matrix
use nalgebra::{Matrix3, Unit, Vector3};

use crate::axis::AxisAngle;
use crate::derivation::Derivation;
use crate::error::{RotationError, RotationResult};
use crate::rotation::Convention;

/// Result of a three-angle extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct EulerExtraction {
    /// Degrees, ordered `[γ, β, α]`.
    ///
    /// For ZYX this is `[Z, Y, X]` and for ZYZ `[first Z, Y, second Z]`,
    /// i.e. the argument order of [`rotation_zyx_euler`](crate::rotation_zyx_euler)
    /// and [`rotation_zyz_euler`](crate::rotation_zyz_euler).
    pub angles: [f64; 3],
    /// The degenerate (gimbal lock) branch was taken and α was fixed at 0°
    pub singular: bool,
    pub derivation: Derivation,
}

/// Result of an axis-angle extraction
#[derive(Debug, Clone, PartialEq)]
pub struct AxisAngleExtraction {
    /// Angle in `[0°, 180°]` and unit axis
    pub rotation: AxisAngle,
    pub derivation: Derivation,
}

/// Extraction settings.
///
/// `epsilon` bounds every degenerate branch: the axis is undefined when
/// `|sin θ| <= epsilon`, ZYX is in gimbal lock when `|cos β| <= epsilon`, and
/// ZYZ when `|sin β| <= epsilon`.
///
/// Input matrices are assumed orthonormal with determinant +1. They are not
/// checked or re-orthonormalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extractor {
    pub epsilon: f64,
}

impl Extractor {
    pub const DEFAULT_EPSILON: f64 = 1e-6;

    pub fn new() -> Self {
        Self::with_epsilon(Self::DEFAULT_EPSILON)
    }

    pub fn with_epsilon(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Angle and unit axis of `m`.
    ///
    /// Fails with [`RotationError::AxisUndefined`] when the angle is within
    /// `epsilon` of 0° or 180°, where no unique axis exists.
    pub fn axis_angle(&self, m: &Matrix3<f64>) -> RotationResult<AxisAngleExtraction> {
        let mut derivation = Derivation::new();

        let trace = m.trace();
        // acos is only defined on [-1, 1]; rounding can push the cosine past it
        let theta = ((trace - 1.0) / 2.0).clamp(-1.0, 1.0).acos();
        let degrees = derivation.angle(
            "theta",
            "acos((trace(R) - 1) / 2)",
            format!("acos(({trace:.4} - 1) / 2)"),
            theta,
        );

        let sin_theta = theta.sin();
        if sin_theta.is_nan() || sin_theta.abs() <= self.epsilon {
            log::debug!(
                "Axis undefined: theta = {degrees:.6}°, |sin(theta)| = {:e}",
                sin_theta.abs()
            );
            return Err(RotationError::AxisUndefined {
                degrees,
                sin_theta,
                epsilon: self.epsilon,
            });
        }

        let two_sin = 2.0 * sin_theta;
        let kx = derivation.value(
            "kx",
            "(r32 - r23) / (2 sin(theta))",
            format!("({:.4} - {:.4}) / {two_sin:.4}", m[(2, 1)], m[(1, 2)]),
            (m[(2, 1)] - m[(1, 2)]) / two_sin,
        );
        let ky = derivation.value(
            "ky",
            "(r13 - r31) / (2 sin(theta))",
            format!("({:.4} - {:.4}) / {two_sin:.4}", m[(0, 2)], m[(2, 0)]),
            (m[(0, 2)] - m[(2, 0)]) / two_sin,
        );
        let kz = derivation.value(
            "kz",
            "(r21 - r12) / (2 sin(theta))",
            format!("({:.4} - {:.4}) / {two_sin:.4}", m[(1, 0)], m[(0, 1)]),
            (m[(1, 0)] - m[(0, 1)]) / two_sin,
        );

        // Renormalize to absorb residual drift
        let axis = Unit::try_new(Vector3::new(kx, ky, kz), 0.0)
            .ok_or(RotationError::ZeroAxis { x: kx, y: ky, z: kz })?;

        Ok(AxisAngleExtraction {
            rotation: AxisAngle::from_unit(axis, degrees),
            derivation,
        })
    }

    /// ZYX Euler angles of `m`, returned as `[γ (Z), β (Y), α (X)]`.
    ///
    /// β is taken on the principal branch `[-90°, 90°]`. In gimbal lock
    /// (`|cos β| <= epsilon`) α is fixed at 0° and γ = atan2(-r12, r22) absorbs
    /// the remaining freedom.
    pub fn zyx(&self, m: &Matrix3<f64>) -> EulerExtraction {
        let mut derivation = Derivation::new();
        let (r11, r12, r21, r22) = (m[(0, 0)], m[(0, 1)], m[(1, 0)], m[(1, 1)]);
        let (r31, r32, r33) = (m[(2, 0)], m[(2, 1)], m[(2, 2)]);

        let hypot = (r32 * r32 + r33 * r33).sqrt();
        let beta_rad = (-r31).atan2(hypot);
        let beta = derivation.angle(
            "beta",
            "atan2(-r31, sqrt(r32^2 + r33^2))",
            format!("atan2({:.4}, {hypot:.4})", -r31),
            beta_rad,
        );

        let cos_beta = beta_rad.cos();
        let singular = cos_beta.abs() <= self.epsilon;
        let (alpha, gamma) = if singular {
            log::debug!("ZYX gimbal lock: beta = {beta:.6}°, alpha fixed at 0°");
            derivation.note("cos(beta) ≈ 0, singular case");
            let alpha = derivation.angle("alpha", "0", String::new(), 0.0);
            let gamma = derivation.angle(
                "gamma",
                "atan2(-r12, r22)",
                format!("atan2({:.4}, {r22:.4})", -r12),
                (-r12).atan2(r22),
            );
            (alpha, gamma)
        } else {
            let alpha = derivation.angle(
                "alpha",
                "atan2(r32/cos(beta), r33/cos(beta))",
                format!("atan2({r32:.4}/{cos_beta:.4}, {r33:.4}/{cos_beta:.4})"),
                (r32 / cos_beta).atan2(r33 / cos_beta),
            );
            let gamma = derivation.angle(
                "gamma",
                "atan2(r21/cos(beta), r11/cos(beta))",
                format!("atan2({r21:.4}/{cos_beta:.4}, {r11:.4}/{cos_beta:.4})"),
                (r21 / cos_beta).atan2(r11 / cos_beta),
            );
            (alpha, gamma)
        };

        EulerExtraction {
            angles: [gamma, beta, alpha],
            singular,
            derivation,
        }
    }

    /// ZYZ Euler angles of `m`, returned as `[γ (first Z), β (Y), α (second Z)]`.
    ///
    /// β = acos(r33) lies in `[0°, 180°]`. When `|sin β| <= epsilon` α is fixed
    /// at 0° and γ = atan2(r21, r11). At β = 180° that choice does not rebuild
    /// the input matrix; the lost degree of freedom cannot be recovered.
    pub fn zyz(&self, m: &Matrix3<f64>) -> EulerExtraction {
        let mut derivation = Derivation::new();
        let (r11, r13, r21, r23) = (m[(0, 0)], m[(0, 2)], m[(1, 0)], m[(1, 2)]);
        let (r31, r32, r33) = (m[(2, 0)], m[(2, 1)], m[(2, 2)]);

        let beta_rad = r33.clamp(-1.0, 1.0).acos();
        let beta = derivation.angle("beta", "acos(r33)", format!("acos({r33:.4})"), beta_rad);

        let sin_beta = beta_rad.sin();
        let singular = sin_beta.abs() <= self.epsilon;
        let (alpha, gamma) = if singular {
            log::debug!("ZYZ gimbal lock: beta = {beta:.6}°, alpha fixed at 0°");
            derivation.note("sin(beta) ≈ 0, singular case");
            let alpha = derivation.angle("alpha", "0", String::new(), 0.0);
            let gamma = derivation.angle(
                "gamma",
                "atan2(r21, r11)",
                format!("atan2({r21:.4}, {r11:.4})"),
                r21.atan2(r11),
            );
            (alpha, gamma)
        } else {
            let alpha = derivation.angle(
                "alpha",
                "atan2(r32/sin(beta), -r31/sin(beta))",
                format!("atan2({r32:.4}/{sin_beta:.4}, {:.4}/{sin_beta:.4})", -r31),
                (r32 / sin_beta).atan2(-r31 / sin_beta),
            );
            let gamma = derivation.angle(
                "gamma",
                "atan2(r23/sin(beta), r13/sin(beta))",
                format!("atan2({r23:.4}/{sin_beta:.4}, {r13:.4}/{sin_beta:.4})"),
                (r23 / sin_beta).atan2(r13 / sin_beta),
            );
            (alpha, gamma)
        };

        EulerExtraction {
            angles: [gamma, beta, alpha],
            singular,
            derivation,
        }
    }

    /// Angles of `m` in the input order of `convention`'s builder.
    ///
    /// For [`Convention::XyzFixed`] this is the ZYX extraction reversed to
    /// `[X, Y, Z]`.
    pub fn euler(&self, convention: Convention, m: &Matrix3<f64>) -> EulerExtraction {
        match convention {
            Convention::XyzFixed => {
                let mut extraction = self.zyx(m);
                extraction.angles.reverse();
                extraction
            }
            Convention::ZyxEuler => self.zyx(m),
            Convention::ZyzEuler => self.zyz(m),
        }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}
