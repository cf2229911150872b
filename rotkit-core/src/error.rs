/// Error type shared by the extractors, transform builder and text parsers
use thiserror::Error;

/// Failure kinds reported by the rotation core.
///
/// Gimbal lock during Euler extraction is not an error; see
/// [`EulerExtraction::singular`](crate::EulerExtraction::singular).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RotationError {
    /// The rotation angle is too close to 0° or 180° for the axis to be
    /// recovered from the matrix.
    #[error(
        "rotation axis undefined: angle {degrees:.4}° has |sin θ| = {sin_theta:e}, \
         not above tolerance {epsilon:e}"
    )]
    AxisUndefined {
        degrees: f64,
        sin_theta: f64,
        epsilon: f64,
    },

    /// An axis identifier other than `x`, `y` or `z`.
    #[error("invalid axis label {label:?}: expected x, y or z")]
    InvalidAxisLabel { label: String },

    /// A rotation axis with zero (or non-finite) length cannot be normalized.
    #[error("axis [{x}, {y}, {z}] has no direction")]
    ZeroAxis { x: f64, y: f64, z: f64 },

    /// Raw text did not match the expected numeric layout.
    #[error("expected {expected}, got {input:?}")]
    Parse {
        expected: &'static str,
        input: String,
    },
}

pub type RotationResult<T> = Result<T, RotationError>;

impl RotationError {
    pub(crate) fn parse(expected: &'static str, input: &str) -> Self {
        Self::Parse {
            expected,
            input: input.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_triggering_values() {
        let err = RotationError::InvalidAxisLabel {
            label: "w".to_string(),
        };
        assert_eq!(err.to_string(), "invalid axis label \"w\": expected x, y or z");

        let err = RotationError::AxisUndefined {
            degrees: 180.0,
            sin_theta: 1.2e-16,
            epsilon: 1e-6,
        };
        assert!(err.to_string().contains("180.0000°"));
    }
}
