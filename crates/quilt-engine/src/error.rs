use std::fmt;

use crate::target::TargetId;

/// Errors raised by vertex containers and batch draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    /// `update` between containers of different lengths.
    ///
    /// Recoverable: resize the destination with `set_len` and retry.
    LengthMismatch { expected: usize, actual: usize },

    /// Geometry and picture (or a batch and its destination) do not belong together.
    ///
    /// This is a programming error. Callers must not carry on drawing after seeing it.
    OwnershipViolation {
        /// The batch the draw was issued against.
        expected: TargetId,
        /// The owner actually found, if the geometry came from a batch at all.
        found: Option<TargetId>,
    },

    /// Bound geometry drawn after the target that made it was dropped.
    TargetGone { target: TargetId },
}

impl BatchError {
    #[inline]
    pub fn is_fatal(&self) -> bool {
        matches!(self, BatchError::OwnershipViolation { .. })
    }
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchError::LengthMismatch { expected, actual } => {
                write!(f, "vertex count mismatch: expected {expected}, got {actual}")
            }
            BatchError::OwnershipViolation { expected, found: Some(found) } => {
                write!(f, "geometry owned by {found} drawn through {expected}")
            }
            BatchError::OwnershipViolation { expected, found: None } => {
                write!(f, "geometry not generated by any batch drawn through {expected}")
            }
            BatchError::TargetGone { target } => write!(f, "{target} no longer exists"),
        }
    }
}

impl std::error::Error for BatchError {}
