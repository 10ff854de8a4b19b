//! Times the three multiplication methods on square matrices of growing size.

use alumath_core::{full, multiply, AlumathError, Matrix, MultiplyMethod};
use std::time::Instant;

fn time_operation<F>(name: &str, operation: F) -> Result<Matrix<i64>, AlumathError>
where
    F: FnOnce() -> Result<Matrix<i64>, AlumathError>,
{
    let start = Instant::now();
    let result = operation()?;
    println!("{}: {:.4} seconds", name, start.elapsed().as_secs_f64());
    Ok(result)
}

fn main() -> Result<(), AlumathError> {
    env_logger::init();
    println!("=== Performance testing ===");

    for (rows, cols) in [(10, 10), (50, 50), (100, 100)] {
        println!("\nTesting {}x{} matrices:", rows, cols);

        let a = full(rows, cols, 2i64)?;
        let b = full(cols, rows, 3i64)?;
        time_operation(
            &format!("Standard multiplication ({}x{} x {}x{})", rows, cols, cols, rows),
            || multiply(&a, &b, MultiplyMethod::Standard),
        )?;

        let c = full(rows, cols, 4i64)?;
        time_operation(
            &format!("Hadamard product ({}x{} o {}x{})", rows, cols, rows, cols),
            || multiply(&a, &c, MultiplyMethod::Hadamard),
        )?;

        let scalar = Matrix::new(vec![vec![5i64]])?;
        time_operation(
            &format!("Scalar multiplication ({}x{} x scalar)", rows, cols),
            || multiply(&a, &scalar, MultiplyMethod::Broadcast),
        )?;
    }
    Ok(())
}
