use std::fmt;

/// The `(rows, cols)` pair describing a matrix's dimensions.
pub type Shape = (usize, usize);

/// Identifies one of the two axes of a matrix.
///
/// Used by row/column accessors to report which axis an out-of-range index
/// was applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Axis 0, indexed by row number.
    Row,
    /// Axis 1, indexed by column number.
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "Row"),
            Axis::Column => write!(f, "Column"),
        }
    }
}
