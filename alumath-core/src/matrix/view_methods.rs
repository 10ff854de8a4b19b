use crate::matrix::Matrix;
use crate::numeric::Numeric;

impl<T: Numeric> Matrix<T> {
    /// Returns a new `(cols, rows)` matrix with `out[j][i] == self[i][j]`.
    ///
    /// The result owns fresh storage; it never aliases `self`.
    pub fn transpose(&self) -> Matrix<T> {
        let mut data = Vec::with_capacity(self.numel());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.data[self.offset(i, j)]);
            }
        }
        Matrix::from_kernel_output(data, self.cols, self.rows)
    }

    /// Returns an independent copy of the matrix. Same as `clone()`.
    pub fn copy(&self) -> Matrix<T> {
        self.clone()
    }
}
