// src/matrix/mod.rs

use crate::error::AlumathError;
use crate::numeric::Numeric;
use crate::types::Shape;
use log::debug;

mod accessors;
pub mod create;
#[cfg(feature = "json")]
mod json;
mod traits;
mod view_methods;

/// A dense, rectangular 2-D matrix of numeric values.
///
/// Elements are stored row-major in a single owned `Vec<T>`; the shape is
/// fixed at construction. Every `Matrix` exclusively owns its storage, so
/// `clone()` (and [`Matrix::copy`]) always yields fully independent data.
///
/// A `Matrix` can only be obtained through validated construction
/// ([`Matrix::new`], [`Matrix::from_rows`], [`Matrix::from_vec`], the
/// creation helpers, or an operation result), which guarantees:
/// - `rows >= 1` and `cols >= 1`,
/// - `data.len() == rows * cols`.
///
/// Downstream code relies on these invariants and never re-checks them.
#[derive(Clone)]
pub struct Matrix<T> {
    pub(crate) data: Vec<T>,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

/// Checks that `rows` describes a non-empty rectangular matrix and returns
/// its shape.
fn validate_rows<T, R: AsRef<[T]>>(rows: &[R]) -> Result<Shape, AlumathError> {
    if rows.is_empty() {
        return Err(AlumathError::invalid_matrix("Matrix cannot be empty"));
    }
    let row_length = rows[0].as_ref().len();
    if row_length == 0 {
        return Err(AlumathError::invalid_matrix("Matrix rows cannot be empty"));
    }
    if let Some((i, row)) = rows
        .iter()
        .enumerate()
        .find(|(_, row)| row.as_ref().len() != row_length)
    {
        return Err(AlumathError::invalid_matrix(format!(
            "All rows must have the same length (row {} has {} elements, expected {})",
            i,
            row.as_ref().len(),
            row_length
        )));
    }
    Ok((rows.len(), row_length))
}

impl<T: Numeric> Matrix<T> {
    /// Creates a matrix from a list of rows, taking ownership of them.
    ///
    /// Fails with [`AlumathError::InvalidMatrix`] when `data` is empty, when
    /// its rows are empty, or when rows differ in length.
    pub fn new(data: Vec<Vec<T>>) -> Result<Self, AlumathError> {
        let (rows, cols) = validate_rows(&data).map_err(|e| {
            debug!("Matrix::new rejected input: {}", e);
            e
        })?;
        let data: Vec<T> = data.into_iter().flatten().collect();
        Ok(Matrix { data, rows, cols })
    }

    /// Creates a matrix by copying borrowed rows.
    ///
    /// Validation is identical to [`Matrix::new`]. The caller keeps its rows;
    /// later changes to them never reach the matrix.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, AlumathError> {
        let (n_rows, n_cols) = validate_rows(rows).map_err(|e| {
            debug!("Matrix::from_rows rejected input: {}", e);
            e
        })?;
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for row in rows {
            data.extend_from_slice(row.as_ref());
        }
        Ok(Matrix {
            data,
            rows: n_rows,
            cols: n_cols,
        })
    }

    /// Creates a matrix from row-major data and a `(rows, cols)` shape.
    pub fn from_vec(data: Vec<T>, shape: Shape) -> Result<Self, AlumathError> {
        let (rows, cols) = shape;
        if data.len() != checked_numel(shape)? {
            return Err(AlumathError::invalid_matrix(format!(
                "data length {} does not match shape {:?}",
                data.len(),
                shape
            )));
        }
        Ok(Matrix { data, rows, cols })
    }

    /// Builds a result matrix from kernel output without re-validating.
    ///
    /// Only for operation kernels whose output length is `rows * cols` by
    /// construction, with both dimensions taken from valid inputs.
    pub(crate) fn from_kernel_output(data: Vec<T>, rows: usize, cols: usize) -> Self {
        debug_assert!(rows >= 1 && cols >= 1);
        debug_assert_eq!(data.len(), rows * cols);
        Matrix { data, rows, cols }
    }
}

/// Element count of a non-empty `shape`, rejecting zero dimensions and
/// counts that overflow `usize`.
pub(crate) fn checked_numel(shape: Shape) -> Result<usize, AlumathError> {
    let (rows, cols) = shape;
    if rows == 0 || cols == 0 {
        return Err(AlumathError::invalid_matrix(format!(
            "Matrix cannot be empty (shape {:?})",
            shape
        )));
    }
    rows.checked_mul(cols).ok_or_else(|| {
        AlumathError::invalid_matrix(format!("shape {:?} has too many elements", shape))
    })
}

impl<T: Numeric> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = AlumathError;

    fn try_from(data: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Matrix::new(data)
    }
}
