// src/matrix/traits.rs

use crate::matrix::Matrix;
use crate::numeric::Numeric;
use approx::{AbsDiffEq, RelativeEq};
use std::fmt;
use std::ops::Index;

// --- Trait Implementations ---

impl<T: Numeric> PartialEq for Matrix<T> {
    /// Exact equality: same shape and every element equal under `==`.
    /// No tolerance is applied; use the `approx` traits for that.
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.data == other.data
    }
}

impl<T: Numeric + Eq> Eq for Matrix<T> {}

impl<T: Numeric> fmt::Debug for Matrix<T> {
    /// Formats as `Matrix([[1, 2], [3, 4]])`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix([")?;
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:?}", value)?;
            }
            write!(f, "]")?;
        }
        write!(f, "])")
    }
}

impl<T: Numeric> fmt::Display for Matrix<T> {
    /// Formats as a bracketed grid, every cell right-aligned to the widest
    /// element of the whole matrix:
    ///
    /// ```text
    /// [
    ///  [ 1  2]
    ///  [30  4]
    /// ]
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self.data.iter().map(|v| v.to_string()).collect();
        let width = cells.iter().map(|s| s.chars().count()).max().unwrap_or(0);

        write!(f, "[")?;
        for row in cells.chunks(self.cols) {
            write!(f, "\n [")?;
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", cell, width = width)?;
            }
            write!(f, "]")?;
        }
        write!(f, "\n]")
    }
}

impl<T: Numeric> Index<usize> for Matrix<T> {
    type Output = [T];

    /// Read-only access to a row, `m[i][j]` style.
    ///
    /// # Panics
    /// Panics if `row >= self.rows()`. Use [`Matrix::get_row`] for a checked copy.
    fn index(&self, row: usize) -> &[T] {
        assert!(
            row < self.rows,
            "Row {} out of bounds for matrix of shape {:?}",
            row,
            self.shape()
        );
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }
}

impl<T> AbsDiffEq for Matrix<T>
where
    T: Numeric + AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T> RelativeEq for Matrix<T>
where
    T: Numeric + RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
