/// Coordinate axes and the axis-angle value type
use std::fmt;
use std::str::FromStr;

use nalgebra::{Matrix3, Unit, Vector3};

use crate::error::{RotationError, RotationResult};
use crate::rotation::rotation_axis_angle;

/// One of the three world axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Elementary right-handed rotation about this axis (angle in degrees).
    ///
    /// A positive angle turns counter-clockwise when viewed from the positive
    /// end of the axis looking toward the origin.
    pub fn rotation(self, degrees: f64) -> Matrix3<f64> {
        let (s, c) = degrees.to_radians().sin_cos();
        match self {
            Axis::X => Matrix3::new(
                1.0, 0.0, 0.0, //
                0.0, c, -s, //
                0.0, s, c,
            ),
            Axis::Y => Matrix3::new(
                c, 0.0, s, //
                0.0, 1.0, 0.0, //
                -s, 0.0, c,
            ),
            Axis::Z => Matrix3::new(
                c, -s, 0.0, //
                s, c, 0.0, //
                0.0, 0.0, 1.0,
            ),
        }
    }

    /// Basis vector along this axis
    pub fn unit(self) -> Unit<Vector3<f64>> {
        match self {
            Axis::X => Vector3::x_axis(),
            Axis::Y => Vector3::y_axis(),
            Axis::Z => Vector3::z_axis(),
        }
    }

    pub fn label(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Axis {
    type Err = RotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            _ => Err(RotationError::InvalidAxisLabel {
                label: s.to_string(),
            }),
        }
    }
}

/// A rotation of `degrees` about a unit `axis`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAngle {
    pub axis: Unit<Vector3<f64>>,
    pub degrees: f64,
}

impl AxisAngle {
    /// Normalize `axis` and pair it with an angle in degrees.
    pub fn new(axis: Vector3<f64>, degrees: f64) -> RotationResult<Self> {
        let zero_axis = || RotationError::ZeroAxis {
            x: axis.x,
            y: axis.y,
            z: axis.z,
        };

        if !axis.iter().all(|c| c.is_finite()) {
            return Err(zero_axis());
        }
        let axis = Unit::try_new(axis, 0.0).ok_or_else(zero_axis)?;

        Ok(Self { axis, degrees })
    }

    pub fn from_unit(axis: Unit<Vector3<f64>>, degrees: f64) -> Self {
        Self { axis, degrees }
    }

    /// Rotation about one of the world axes
    pub fn about(axis: Axis, degrees: f64) -> Self {
        Self::from_unit(axis.unit(), degrees)
    }

    /// Rotation matrix via the Rodrigues formula
    pub fn to_matrix(&self) -> Matrix3<f64> {
        rotation_axis_angle(self.axis.as_ref(), self.degrees)
    }
}
