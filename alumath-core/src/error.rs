use crate::types::{Axis, Shape};
use thiserror::Error;

/// Custom error type for the alumath library.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum AlumathError {
    #[error("Invalid matrix: {reason}")]
    InvalidMatrix { reason: String },

    #[error(
        "Cannot multiply matrices of shapes {shape_a:?} and {shape_b:?}. Number of columns in first matrix ({}) must equal number of rows in second matrix ({}).",
        .shape_a.1,
        .shape_b.0
    )]
    InnerDimensionMismatch { shape_a: Shape, shape_b: Shape },

    #[error("Matrices must have the same dimensions for {operation}. Got {shape_a:?} and {shape_b:?}.")]
    ShapeMismatch {
        shape_a: Shape,
        shape_b: Shape,
        operation: String,
    },

    #[error("Cannot broadcast or multiply matrices of shapes {shape_a:?} and {shape_b:?}")]
    BroadcastIncompatible { shape_a: Shape, shape_b: Shape },

    #[error("Index ({row}, {col}) out of bounds for matrix of shape {shape:?}")]
    IndexOutOfBounds { row: usize, col: usize, shape: Shape },

    #[error("{axis} {index} out of bounds (length {len})")]
    AxisOutOfBounds { axis: Axis, index: usize, len: usize },

    #[error("Unknown method: '{0}' (expected one of: standard, hadamard, broadcast)")]
    UnknownMethod(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Coarse classification of [`AlumathError`] variants.
///
/// Dimension failures come in several shapes (inner mismatch, Hadamard
/// mismatch, broadcast incompatibility); matching on the kind lets callers
/// treat them alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed construction input.
    InvalidMatrix,
    /// Shapes incompatible with the requested operation.
    Dimension,
    /// Element, row or column index outside the matrix.
    OutOfBounds,
    /// Bad method name or creation argument.
    Configuration,
}

impl AlumathError {
    pub(crate) fn invalid_matrix(reason: impl Into<String>) -> Self {
        AlumathError::InvalidMatrix {
            reason: reason.into(),
        }
    }

    /// Returns the [`ErrorKind`] this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AlumathError::InvalidMatrix { .. } => ErrorKind::InvalidMatrix,
            AlumathError::InnerDimensionMismatch { .. }
            | AlumathError::ShapeMismatch { .. }
            | AlumathError::BroadcastIncompatible { .. } => ErrorKind::Dimension,
            AlumathError::IndexOutOfBounds { .. } | AlumathError::AxisOutOfBounds { .. } => {
                ErrorKind::OutOfBounds
            }
            AlumathError::UnknownMethod(_) | AlumathError::InvalidArgument(_) => {
                ErrorKind::Configuration
            }
        }
    }

    pub fn is_dimension_error(&self) -> bool {
        self.kind() == ErrorKind::Dimension
    }
}
