use alumath_core::{Matrix, Numeric};

// Helpers shared by the integration test crates.
// allow(dead_code) because not every test crate uses every helper.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub fn create_test_matrix<T: Numeric>(rows: Vec<Vec<T>>) -> Matrix<T> {
    Matrix::new(rows).expect("Test matrix creation failed")
}
