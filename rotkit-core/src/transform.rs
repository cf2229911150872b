/// 4x4 homogeneous transforms: rotation + translation, composition, point application
use nalgebra::{Matrix3, Matrix4, Point3, Vector3, Vector4};

use crate::axis::{Axis, AxisAngle};
use crate::error::RotationResult;

/// Where the rotation block of a homogeneous transform comes from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RotationSource {
    /// Elementary rotation about a world axis (degrees)
    Axis { axis: Axis, degrees: f64 },
    AxisAngle(AxisAngle),
    /// An existing rotation matrix, used as given
    Matrix(Matrix3<f64>),
}

impl RotationSource {
    pub fn to_matrix(&self) -> Matrix3<f64> {
        match self {
            RotationSource::Axis { axis, degrees } => axis.rotation(*degrees),
            RotationSource::AxisAngle(axis_angle) => axis_angle.to_matrix(),
            RotationSource::Matrix(m) => *m,
        }
    }
}

impl From<AxisAngle> for RotationSource {
    fn from(axis_angle: AxisAngle) -> Self {
        RotationSource::AxisAngle(axis_angle)
    }
}

impl From<Matrix3<f64>> for RotationSource {
    fn from(m: Matrix3<f64>) -> Self {
        RotationSource::Matrix(m)
    }
}

/// Transform builder for rigid transformations
pub struct Transform;

impl Transform {
    /// Embed `rotation` in the top-left block and `translation` in the last
    /// column of a 4x4 identity
    pub fn homogeneous(rotation: &Matrix3<f64>, translation: &Vector3<f64>) -> Matrix4<f64> {
        let mut t = Matrix4::identity();
        t.fixed_view_mut::<3, 3>(0, 0).copy_from(rotation);
        t.fixed_view_mut::<3, 1>(0, 3).copy_from(translation);
        t
    }

    pub fn build(source: &RotationSource, translation: &Vector3<f64>) -> Matrix4<f64> {
        Self::homogeneous(&source.to_matrix(), translation)
    }

    /// Rotation about a world axis given by its text label (`x`, `y` or `z`)
    pub fn from_label(
        label: &str,
        degrees: f64,
        translation: &Vector3<f64>,
    ) -> RotationResult<Matrix4<f64>> {
        let axis = label.parse::<Axis>()?;
        Ok(Self::build(&RotationSource::Axis { axis, degrees }, translation))
    }

    /// Pure translation
    pub fn translation(translation: &Vector3<f64>) -> Matrix4<f64> {
        Self::homogeneous(&Matrix3::identity(), translation)
    }

    /// Multiply `transforms` left to right, in the order given.
    ///
    /// `compose([a, b, c])` is `a * b * c`; the identity for an empty sequence.
    pub fn compose<'a, I>(transforms: I) -> Matrix4<f64>
    where
        I: IntoIterator<Item = &'a Matrix4<f64>>,
    {
        transforms
            .into_iter()
            .fold(Matrix4::identity(), |acc, t| acc * t)
    }

    /// Apply `transform` to `point` through homogeneous coordinates
    pub fn apply(transform: &Matrix4<f64>, point: &Point3<f64>) -> Point3<f64> {
        let lifted = Vector4::new(point.x, point.y, point.z, 1.0);
        let moved = transform * lifted;
        Point3::new(moved.x, moved.y, moved.z)
    }

    pub fn rotation_part(transform: &Matrix4<f64>) -> Matrix3<f64> {
        transform.fixed_view::<3, 3>(0, 0).into_owned()
    }

    pub fn translation_part(transform: &Matrix4<f64>) -> Vector3<f64> {
        transform.fixed_view::<3, 1>(0, 3).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RotationError;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    prop_compose! {
        fn transform_strategy()(
            axis in prop_oneof![Just(Axis::X), Just(Axis::Y), Just(Axis::Z)],
            degrees in -360.0..360.0f64,
            tx in -50.0..50.0f64,
            ty in -50.0..50.0f64,
            tz in -50.0..50.0f64,
        ) -> Matrix4<f64> {
            Transform::build(&RotationSource::Axis { axis, degrees }, &Vector3::new(tx, ty, tz))
        }
    }

    #[test]
    fn test_homogeneous_layout() {
        let rotation = Axis::Z.rotation(30.0);
        let translation = Vector3::new(1.0, 2.0, 3.0);
        let t = Transform::homogeneous(&rotation, &translation);

        assert_eq!(Transform::rotation_part(&t), rotation);
        assert_eq!(Transform::translation_part(&t), translation);
        assert_eq!(t.row(3).into_owned(), Vector4::new(0.0, 0.0, 0.0, 1.0).transpose());
    }

    #[test]
    fn test_identity_transform_leaves_point_unchanged() {
        let point = Point3::new(1.5, -2.25, 3.0);
        assert_eq!(Transform::apply(&Matrix4::identity(), &point), point);
    }

    #[test]
    fn test_quarter_turn_about_z() {
        let t = Transform::build(
            &AxisAngle::about(Axis::Z, 90.0).into(),
            &Vector3::zeros(),
        );
        let moved = Transform::apply(&t, &Point3::new(1.0, 0.0, 0.0));
        assert_abs_diff_eq!(moved, Point3::new(0.0, 1.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn test_rotation_then_translation() {
        let t = Transform::from_label("z", 90.0, &Vector3::new(10.0, 0.0, 0.0)).unwrap();
        let moved = Transform::apply(&t, &Point3::new(1.0, 0.0, 0.0));
        assert_abs_diff_eq!(moved, Point3::new(10.0, 1.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_label_is_rejected() {
        let err = Transform::from_label("q", 10.0, &Vector3::zeros()).unwrap_err();
        assert_eq!(
            err,
            RotationError::InvalidAxisLabel {
                label: "q".to_string()
            }
        );
    }

    #[test]
    fn test_compose_preserves_order() {
        let rotate = Transform::build(
            &RotationSource::Axis {
                axis: Axis::Z,
                degrees: 90.0,
            },
            &Vector3::zeros(),
        );
        let shift = Transform::translation(&Vector3::new(1.0, 0.0, 0.0));
        let point = Point3::origin();

        // Rightmost acts first
        let shift_then_rotate = Transform::compose([&rotate, &shift]);
        let rotate_then_shift = Transform::compose([&shift, &rotate]);

        assert_abs_diff_eq!(
            Transform::apply(&shift_then_rotate, &point),
            Point3::new(0.0, 1.0, 0.0),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            Transform::apply(&rotate_then_shift, &point),
            Point3::new(1.0, 0.0, 0.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_compose_empty_is_identity() {
        assert_eq!(Transform::compose(std::iter::empty()), Matrix4::identity());
    }

    #[test]
    fn test_matrix_source_is_used_as_given() {
        let m = Axis::Y.rotation(12.0) * Axis::X.rotation(-40.0);
        assert_eq!(RotationSource::from(m).to_matrix(), m);
    }

    #[test]
    fn test_two_frame_chain() {
        // x 30°, y 60°, z 90° multiplied left to right, then a translation on the right
        let steps = [(Axis::X, 30.0), (Axis::Y, 60.0), (Axis::Z, 90.0)];
        let mut chain: Vec<Matrix4<f64>> = steps
            .iter()
            .map(|&(axis, degrees)| {
                Transform::build(&RotationSource::Axis { axis, degrees }, &Vector3::zeros())
            })
            .collect();
        chain.push(Transform::translation(&Vector3::new(10.0, 5.0, 6.0)));

        let t = Transform::compose(&chain);
        let rotation = Axis::X.rotation(30.0) * Axis::Y.rotation(60.0) * Axis::Z.rotation(90.0);

        assert_abs_diff_eq!(Transform::rotation_part(&t), rotation, epsilon = 1e-12);
        assert_abs_diff_eq!(
            Transform::translation_part(&t),
            rotation * Vector3::new(10.0, 5.0, 6.0),
            epsilon = 1e-12
        );

        let point = Point3::new(1.0, 2.0, 3.0);
        let expected = rotation * (point.coords + Vector3::new(10.0, 5.0, 6.0));
        assert_abs_diff_eq!(
            Transform::apply(&t, &point).coords,
            expected,
            epsilon = 1e-9
        );
    }

    proptest! {
        #[test]
        fn should_compose_associatively(
            a in transform_strategy(),
            b in transform_strategy(),
            c in transform_strategy(),
        ) {
            assert_abs_diff_eq!((a * b) * c, a * (b * c), epsilon = 1e-9);
            assert_abs_diff_eq!(Transform::compose([&a, &b, &c]), a * (b * c), epsilon = 1e-9);
        }

        #[test]
        fn should_keep_homogeneous_coordinate_at_one(
            a in transform_strategy(),
            b in transform_strategy(),
            x in -100.0..100.0f64,
            y in -100.0..100.0f64,
            z in -100.0..100.0f64,
        ) {
            let t = Transform::compose([&a, &b]);
            assert_eq!(t.row(3).into_owned(), Vector4::new(0.0, 0.0, 0.0, 1.0).transpose());

            let lifted = t * Vector4::new(x, y, z, 1.0);
            prop_assert_eq!(lifted.w, 1.0);
        }

        #[test]
        fn should_preserve_distances(
            t in transform_strategy(),
            x in -100.0..100.0f64,
            y in -100.0..100.0f64,
            z in -100.0..100.0f64,
        ) {
            let p = Point3::new(x, y, z);
            let q = Point3::origin();
            let before = (p - q).norm();
            let after = (Transform::apply(&t, &p) - Transform::apply(&t, &q)).norm();
            assert_abs_diff_eq!(before, after, epsilon = 1e-9);
        }
    }
}
