use super::*;
use crate::matrix::create::identity;
use crate::utils::testing::{check_matrix_near, create_test_matrix};

#[test]
fn test_matmul_forward() {
    let a = create_test_matrix(vec![vec![1, 2], vec![3, 4]]);
    let b = create_test_matrix(vec![vec![5, 6], vec![7, 8]]);
    let output = matmul_op(&a, &b).unwrap();
    assert_eq!(output.to_vec(), vec![vec![19, 22], vec![43, 50]]);
}

#[test]
fn test_matmul_forward_non_square() {
    let a = create_test_matrix(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    let b = create_test_matrix(vec![vec![7.0, 8.0], vec![9.0, 10.0], vec![11.0, 12.0]]);
    let output = matmul_op(&a, &b).unwrap();
    check_matrix_near(&output, (2, 2), &[58.0, 64.0, 139.0, 154.0], 1e-12);
}

#[test]
fn test_matmul_identity() {
    let a = create_test_matrix(vec![vec![1, 2], vec![3, 4]]);
    let eye = create_test_matrix(vec![vec![1, 0], vec![0, 1]]);
    assert_eq!(matmul_op(&a, &eye).unwrap(), a);
    assert_eq!(matmul_op(&identity(2).unwrap(), &a).unwrap(), a);
}

#[test]
fn test_matmul_column_vector() {
    let a = create_test_matrix(vec![vec![1, 2, 3], vec![4, 5, 6]]);
    let v = create_test_matrix(vec![vec![1], vec![2], vec![3]]);
    let output = a.matmul(&v).unwrap();
    assert_eq!(output.shape(), (2, 1));
    assert_eq!(output.to_vec(), vec![vec![14], vec![32]]);
}

#[test]
fn test_matmul_outer_product() {
    let col = create_test_matrix(vec![vec![1], vec![2]]);
    let row = create_test_matrix(vec![vec![3, 4, 5]]);
    let output = matmul_op(&col, &row).unwrap();
    assert_eq!(output.to_vec(), vec![vec![3, 4, 5], vec![6, 8, 10]]);
}

#[test]
fn test_matmul_shape_mismatch_inner() {
    let a = create_test_matrix(vec![vec![1, 2]]);
    let b = create_test_matrix(vec![vec![3], vec![4], vec![5]]);
    let result = matmul_op(&a, &b);
    match result.err().unwrap() {
        AlumathError::InnerDimensionMismatch { shape_a, shape_b } => {
            assert_eq!(shape_a, (1, 2));
            assert_eq!(shape_b, (3, 1));
        }
        e => panic!("Expected InnerDimensionMismatch, got {:?}", e),
    }
}

#[test]
fn test_matmul_float_accumulation_matches_naive_sum() {
    let a = create_test_matrix(vec![vec![0.1, 0.2, 0.3]]);
    let b = create_test_matrix(vec![vec![1.0], vec![1.0], vec![1.0]]);
    let output = matmul_op(&a, &b).unwrap();
    // Same left-to-right order as 0.0 + 0.1 + 0.2 + 0.3, compared exactly.
    assert_eq!(output.get(0, 0).unwrap(), 0.0 + 0.1 + 0.2 + 0.3);
}
