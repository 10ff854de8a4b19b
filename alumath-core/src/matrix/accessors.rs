// src/matrix/accessors.rs
use crate::{
    error::AlumathError,
    matrix::Matrix,
    numeric::Numeric,
    types::{Axis, Shape},
};

impl<T: Numeric> Matrix<T> {
    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the `(rows, cols)` shape.
    pub fn shape(&self) -> Shape {
        (self.rows, self.cols)
    }

    /// Returns the total number of elements.
    pub fn numel(&self) -> usize {
        self.rows * self.cols
    }

    /// True for a `(1, 1)` matrix, which broadcasting treats as a scalar.
    pub fn is_scalar(&self) -> bool {
        self.shape() == (1, 1)
    }

    /// Row-major view of the elements.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub(crate) fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_index(&self, row: usize, col: usize) -> Result<usize, AlumathError> {
        if row < self.rows && col < self.cols {
            Ok(self.offset(row, col))
        } else {
            Err(AlumathError::IndexOutOfBounds {
                row,
                col,
                shape: self.shape(),
            })
        }
    }

    /// Returns the element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<T, AlumathError> {
        let offset = self.check_index(row, col)?;
        Ok(self.data[offset])
    }

    /// Overwrites the element at `(row, col)`. The shape never changes.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), AlumathError> {
        let offset = self.check_index(row, col)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Returns a copy of row `row`.
    pub fn get_row(&self, row: usize) -> Result<Vec<T>, AlumathError> {
        if row >= self.rows {
            return Err(AlumathError::AxisOutOfBounds {
                axis: Axis::Row,
                index: row,
                len: self.rows,
            });
        }
        let start = self.offset(row, 0);
        Ok(self.data[start..start + self.cols].to_vec())
    }

    /// Returns a copy of column `col`.
    pub fn get_column(&self, col: usize) -> Result<Vec<T>, AlumathError> {
        if col >= self.cols {
            return Err(AlumathError::AxisOutOfBounds {
                axis: Axis::Column,
                index: col,
                len: self.cols,
            });
        }
        Ok(self.data.iter().skip(col).step_by(self.cols).copied().collect())
    }

    /// Iterates over the rows as slices.
    pub fn iter_rows(&self) -> std::slice::Chunks<'_, T> {
        self.data.chunks(self.cols)
    }

    /// Returns the elements as an owned list of rows.
    pub fn to_vec(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(|row| row.to_vec()).collect()
    }

    /// Consumes the matrix, returning its row-major data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}
