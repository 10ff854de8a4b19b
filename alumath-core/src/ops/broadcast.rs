// src/ops/broadcast.rs
//
// Simplified 2-D broadcasting: shape resolution and the element-wise kernel.

use crate::error::AlumathError;
use crate::matrix::Matrix;
use crate::numeric::Numeric;
use crate::ops::arithmetic::scalar_mul_op;
use crate::ops::linalg::matmul_op;
use crate::types::Shape;
use log::{debug, trace};

/// Checks whether two shapes satisfy the restricted broadcasting rule.
///
/// Compatible when the shapes are identical, or when one side has a single
/// row and the same number of columns as the other, or a single column and
/// the same number of rows as the other. Only one side broadcasts, along one
/// axis; a dimension that is neither 1 nor equal never broadcasts.
pub fn can_broadcast(shape_a: Shape, shape_b: Shape) -> bool {
    if shape_a == shape_b {
        return true;
    }
    (shape_a.0 == 1 && shape_a.1 == shape_b.1)
        || (shape_a.1 == 1 && shape_a.0 == shape_b.0)
        || (shape_b.0 == 1 && shape_b.1 == shape_a.1)
        || (shape_b.1 == 1 && shape_b.0 == shape_a.0)
}

/// A pair of shapes already checked by [`can_broadcast`].
///
/// The element-wise kernel indexes its inputs with "row `i` unless the
/// operand has a single row, column `j` unless it has a single column".
/// That is only in bounds for compatible shapes, so the kernel takes a plan
/// and a plan can only be built from compatible shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BroadcastPlan {
    shape_a: Shape,
    shape_b: Shape,
    output_shape: Shape,
}

impl BroadcastPlan {
    /// Returns `None` when the shapes cannot be broadcast together.
    pub fn new(shape_a: Shape, shape_b: Shape) -> Option<Self> {
        if !can_broadcast(shape_a, shape_b) {
            return None;
        }
        Some(BroadcastPlan {
            shape_a,
            shape_b,
            output_shape: (shape_a.0.max(shape_b.0), shape_a.1.max(shape_b.1)),
        })
    }

    pub fn output_shape(&self) -> Shape {
        self.output_shape
    }

    pub fn input_shapes(&self) -> (Shape, Shape) {
        (self.shape_a, self.shape_b)
    }
}

/// The branch [`broadcast_mul_op`] takes for a pair of shapes.
///
/// Variants are listed in priority order: the first rule whose condition
/// holds wins, even when a later rule would also apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BroadcastRule {
    /// A is `(1, 1)`: scale B by `A[0][0]`.
    ScalarLeft,
    /// B is `(1, 1)`: scale A by `B[0][0]`.
    ScalarRight,
    /// A is a single row with `A.cols == B.rows`: standard product.
    RowVectorMatmul,
    /// B is a single column with `A.cols == B.rows`: standard product.
    ColumnVectorMatmul,
    /// Shapes pass [`can_broadcast`]: element-wise product with broadcasting.
    Elementwise(BroadcastPlan),
    /// Fallback standard product when `A.cols == B.rows`.
    Matmul,
}

/// Picks the [`BroadcastRule`] for two shapes without computing anything.
///
/// Fails with [`AlumathError::BroadcastIncompatible`] when no rule applies.
pub fn resolve_broadcast(shape_a: Shape, shape_b: Shape) -> Result<BroadcastRule, AlumathError> {
    let (a_rows, a_cols) = shape_a;
    let (b_rows, b_cols) = shape_b;

    if shape_a == (1, 1) {
        Ok(BroadcastRule::ScalarLeft)
    } else if shape_b == (1, 1) {
        Ok(BroadcastRule::ScalarRight)
    } else if a_rows == 1 && a_cols == b_rows {
        Ok(BroadcastRule::RowVectorMatmul)
    } else if b_cols == 1 && a_cols == b_rows {
        Ok(BroadcastRule::ColumnVectorMatmul)
    } else if let Some(plan) = BroadcastPlan::new(shape_a, shape_b) {
        Ok(BroadcastRule::Elementwise(plan))
    } else if a_cols == b_rows {
        Ok(BroadcastRule::Matmul)
    } else {
        Err(AlumathError::BroadcastIncompatible { shape_a, shape_b })
    }
}

/// Element-wise product where a single-row or single-column operand is
/// repeated along that axis to the output shape given by `plan`.
///
/// Fails with [`AlumathError::BroadcastIncompatible`] if `a` and `b` are not
/// the shapes the plan was built for.
pub fn broadcast_elementwise_op<T: Numeric>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    plan: &BroadcastPlan,
) -> Result<Matrix<T>, AlumathError> {
    if plan.input_shapes() != (a.shape(), b.shape()) {
        return Err(AlumathError::BroadcastIncompatible {
            shape_a: a.shape(),
            shape_b: b.shape(),
        });
    }

    let (out_rows, out_cols) = plan.output_shape();
    let mut output_data = Vec::with_capacity(out_rows * out_cols);

    for i in 0..out_rows {
        let a_row = if a.rows > 1 { i } else { 0 };
        let b_row = if b.rows > 1 { i } else { 0 };
        for j in 0..out_cols {
            let a_col = if a.cols > 1 { j } else { 0 };
            let b_col = if b.cols > 1 { j } else { 0 };
            let val_a = a.data[a.offset(a_row, a_col)];
            let val_b = b.data[b.offset(b_row, b_col)];
            output_data.push(val_a * val_b);
        }
    }

    trace!(
        "broadcast_elementwise_op: {:?} * {:?} -> {:?}",
        a.shape(),
        b.shape(),
        plan.output_shape()
    );
    Ok(Matrix::from_kernel_output(output_data, out_rows, out_cols))
}

/// Multiplies two matrices, choosing between scalar scaling, the standard
/// product and element-wise broadcasting from their shapes.
///
/// See [`BroadcastRule`] for the order in which the branches are tried.
pub fn broadcast_mul_op<T: Numeric>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, AlumathError> {
    let rule = resolve_broadcast(a.shape(), b.shape()).map_err(|e| {
        debug!("broadcast_mul_op: {}", e);
        e
    })?;
    debug!(
        "broadcast_mul_op: {:?} x {:?} resolved to {:?}",
        a.shape(),
        b.shape(),
        rule
    );

    match rule {
        BroadcastRule::ScalarLeft => Ok(scalar_mul_op(a.data[0], b)),
        BroadcastRule::ScalarRight => Ok(scalar_mul_op(b.data[0], a)),
        BroadcastRule::RowVectorMatmul
        | BroadcastRule::ColumnVectorMatmul
        | BroadcastRule::Matmul => matmul_op(a, b),
        BroadcastRule::Elementwise(plan) => broadcast_elementwise_op(a, b, &plan),
    }
}

impl<T: Numeric> Matrix<T> {
    /// Multiplication with broadcasting, see [`broadcast_mul_op`].
    pub fn broadcast_mul(&self, other: &Matrix<T>) -> Result<Matrix<T>, AlumathError> {
        broadcast_mul_op(self, other)
    }
}

#[cfg(test)]
#[path = "broadcast_test.rs"]
mod tests;
