use crate::error::AlumathError;
use crate::matrix::Matrix;
use crate::numeric::Numeric;
use log::trace;

/// Performs the standard matrix product C = A @ B.
///
/// A: [M, K], B: [K, N] -> C: [M, N] with
/// `C[i][j] = sum over l of A[i][l] * B[l][j]`, accumulated left to right
/// in `T` (no compensated summation, no overflow checks).
///
/// Fails with [`AlumathError::InnerDimensionMismatch`] when `A.cols != B.rows`.
pub fn matmul_op<T: Numeric>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, AlumathError> {
    if a.cols != b.rows {
        return Err(AlumathError::InnerDimensionMismatch {
            shape_a: a.shape(),
            shape_b: b.shape(),
        });
    }

    let m = a.rows;
    let k = a.cols; // == b.rows
    let n = b.cols;

    let mut output_data = vec![T::zero(); m * n];
    for i in 0..m {
        for j in 0..n {
            let mut sum = T::zero();
            for l in 0..k {
                sum += a.data[i * k + l] * b.data[l * n + j];
            }
            output_data[i * n + j] = sum;
        }
    }

    trace!("matmul_op: {:?} x {:?} -> {:?}", a.shape(), b.shape(), (m, n));
    Ok(Matrix::from_kernel_output(output_data, m, n))
}

impl<T: Numeric> Matrix<T> {
    /// Standard matrix product, see [`matmul_op`].
    pub fn matmul(&self, other: &Matrix<T>) -> Result<Matrix<T>, AlumathError> {
        matmul_op(self, other)
    }
}

#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;
