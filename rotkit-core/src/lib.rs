/// rotkit core library - rigid-body rotation and transform math
///
/// Builds 3x3 rotation matrices from XYZ fixed angles, ZYX and ZYZ Euler
/// angles and axis-angle pairs, recovers those parameters from a matrix
/// (including the gimbal-lock and undefined-axis cases), and builds, composes
/// and applies 4x4 homogeneous transforms. Every operation is a pure function
/// over small value types; angles are degrees at the interface.

pub mod axis;
pub mod derivation;
pub mod error;
pub mod extract;
pub mod parse;
pub mod rotation;
pub mod transform;

// Re-export commonly used types
pub use axis::{Axis, AxisAngle};
pub use derivation::{Derivation, Line};
pub use error::{RotationError, RotationResult};
pub use extract::{AxisAngleExtraction, EulerExtraction, Extractor};
pub use rotation::{
    rotation_axis_angle, rotation_xyz_fixed, rotation_zyx_euler, rotation_zyz_euler, Convention,
};
pub use transform::{RotationSource, Transform};

pub use nalgebra::{Matrix3, Matrix4, Point3, Unit, Vector3};
