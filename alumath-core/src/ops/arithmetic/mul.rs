use crate::error::AlumathError;
use crate::matrix::Matrix;
use crate::numeric::Numeric;
use log::trace;

// --- Kernels ---

/// Element-wise product of two equally-shaped matrices (Hadamard product).
///
/// `C[i][j] = A[i][j] * B[i][j]`. Fails with [`AlumathError::ShapeMismatch`]
/// when the shapes differ; no broadcasting happens here.
pub fn hadamard_op<T: Numeric>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, AlumathError> {
    if a.shape() != b.shape() {
        return Err(AlumathError::ShapeMismatch {
            shape_a: a.shape(),
            shape_b: b.shape(),
            operation: "Hadamard product".to_string(),
        });
    }

    let output_data: Vec<T> = a
        .data
        .iter()
        .zip(b.data.iter())
        .map(|(&x, &y)| x * y)
        .collect();

    trace!("hadamard_op: {:?}", a.shape());
    Ok(Matrix::from_kernel_output(output_data, a.rows, a.cols))
}

/// Multiplies every element of `matrix` by `scalar`. Always succeeds.
///
/// The scalar is the left operand of each product (`scalar * m[i][j]`).
pub fn scalar_mul_op<T: Numeric>(scalar: T, matrix: &Matrix<T>) -> Matrix<T> {
    let output_data: Vec<T> = matrix.data.iter().map(|&x| scalar * x).collect();
    Matrix::from_kernel_output(output_data, matrix.rows, matrix.cols)
}

impl<T: Numeric> Matrix<T> {
    /// Hadamard product, see [`hadamard_op`].
    pub fn hadamard(&self, other: &Matrix<T>) -> Result<Matrix<T>, AlumathError> {
        hadamard_op(self, other)
    }

    /// Returns a new matrix with every element multiplied by `scalar`.
    pub fn scale(&self, scalar: T) -> Matrix<T> {
        scalar_mul_op(scalar, self)
    }
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
