use crate::matrix::Matrix;
use crate::numeric::Numeric;
use crate::types::Shape;

/// Checks that a matrix has the expected shape and that its row-major data
/// is within `tolerance` of `expected_data`, element by element.
/// Panics with the first offending position otherwise.
pub fn check_matrix_near(
    actual: &Matrix<f64>,
    expected_shape: Shape,
    expected_data: &[f64],
    tolerance: f64,
) {
    assert_eq!(actual.shape(), expected_shape, "Shape mismatch");
    assert_eq!(
        actual.numel(),
        expected_data.len(),
        "Data length mismatch"
    );

    for (i, (a, e)) in actual.as_slice().iter().zip(expected_data.iter()).enumerate() {
        let diff = (a - e).abs();
        if diff > tolerance {
            panic!(
                "Data mismatch at ({}, {}): actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i / actual.cols(),
                i % actual.cols(),
                a,
                e,
                diff,
                tolerance
            );
        }
    }
}

/// Helper to create a matrix for testing purposes.
pub fn create_test_matrix<T: Numeric>(rows: Vec<Vec<T>>) -> Matrix<T> {
    Matrix::new(rows).expect("Failed to create test matrix")
}
