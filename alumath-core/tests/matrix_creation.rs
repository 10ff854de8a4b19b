use alumath_core::{
    full, identity, ones, randn_with_rng, random_uniform_with_rng, zeros, AlumathError, Axis,
    ErrorKind, Matrix,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod common;
use common::{create_test_matrix, init_logger};

#[test]
fn test_matrix_creation() {
    init_logger();
    let data = vec![vec![1, 2, 3], vec![4, 5, 6]];
    let m = create_test_matrix(data.clone());
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.rows(), 2);
    assert_eq!(m.cols(), 3);
    assert_eq!(m.to_vec(), data);
}

#[test]
fn test_matrix_creation_mixed_values() {
    // Integers and fractions share one numeric type.
    let m = create_test_matrix(vec![vec![1.0, 2.5], vec![-3.0, 4.25]]);
    assert_eq!(m.get(1, 1).unwrap(), 4.25);
}

#[test]
fn test_matrix_creation_errors() {
    init_logger();
    let ragged = Matrix::new(vec![vec![1, 2], vec![3]]);
    match ragged.err().unwrap() {
        AlumathError::InvalidMatrix { reason } => {
            assert!(reason.contains("same length"), "unexpected reason: {}", reason)
        }
        e => panic!("Expected InvalidMatrix, got {:?}", e),
    }

    assert_eq!(
        Matrix::<f64>::new(vec![]).unwrap_err().kind(),
        ErrorKind::InvalidMatrix
    );
    assert_eq!(
        Matrix::<f64>::new(vec![vec![], vec![]]).unwrap_err().kind(),
        ErrorKind::InvalidMatrix
    );
}

#[test]
fn test_construction_owns_its_data() {
    let mut source = vec![vec![1, 2], vec![3, 4]];
    let m = Matrix::from_rows(&source).unwrap();
    source[1][1] = 40;
    source.push(vec![5, 6]);
    assert_eq!(m.to_vec(), vec![vec![1, 2], vec![3, 4]]);

    let mut out = m.to_vec();
    out[0][0] = 10;
    assert_eq!(m.get(0, 0).unwrap(), 1);
}

#[test]
fn test_out_of_bounds_is_not_invalid_matrix() {
    let mut m = create_test_matrix(vec![vec![1, 2], vec![3, 4]]);
    let err = m.set(5, 0, 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfBounds);
    assert_eq!(
        m.get_column(2).unwrap_err(),
        AlumathError::AxisOutOfBounds {
            axis: Axis::Column,
            index: 2,
            len: 2
        }
    );
}

#[test]
fn test_creation_helpers() {
    assert_eq!(zeros::<i32>(2, 2).unwrap().to_vec(), vec![vec![0, 0], vec![0, 0]]);
    assert_eq!(ones::<i32>(1, 3).unwrap().to_vec(), vec![vec![1, 1, 1]]);
    assert_eq!(full(2, 1, 9i64).unwrap().to_vec(), vec![vec![9], vec![9]]);
    assert_eq!(identity::<f64>(2).unwrap().to_vec(), vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
}

#[test]
fn test_seeded_random_helpers() {
    let a: Matrix<f64> = randn_with_rng(3, 2, &mut StdRng::seed_from_u64(11)).unwrap();
    let b: Matrix<f64> = randn_with_rng(3, 2, &mut StdRng::seed_from_u64(11)).unwrap();
    assert_eq!(a, b);

    let mut rng = StdRng::seed_from_u64(5);
    let u = random_uniform_with_rng(2, 2, 0.0f32, 1.0, &mut rng).unwrap();
    assert!(u.as_slice().iter().all(|&x| (0.0..1.0).contains(&x)));
    assert_eq!(
        randn_with_rng::<f64, _>(usize::MAX, 2, &mut rng).unwrap_err().kind(),
        ErrorKind::InvalidMatrix
    );
}

#[test]
fn test_display_snapshot() {
    let m = create_test_matrix(vec![vec![1, 2, 3], vec![4, 5, 6]]);
    assert_eq!(m.to_string(), "[\n [1 2 3]\n [4 5 6]\n]");

    let wide = create_test_matrix(vec![vec![19, 22], vec![43, 150]]);
    assert_eq!(wide.to_string(), "[\n [ 19  22]\n [ 43 150]\n]");
}

#[cfg(feature = "json")]
#[test]
fn test_json_ingestion() {
    init_logger();
    let m = Matrix::<i64>::from_json_str("[[1, 2, 3], [4, 5, 6]]").unwrap();
    assert_eq!(m.shape(), (2, 3));

    for bad in [
        "\"not a matrix\"",
        "[]",
        "[1, 2]",
        "[[1, 2], [3]]",
        "[[1, \"x\"]]",
        "[[1, true]]",
        "[[null]]",
    ] {
        let err = Matrix::<i64>::from_json_str(bad).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidMatrix, "input {}", bad);
    }
}
