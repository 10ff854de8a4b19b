//! Walks through the library: construction, the three multiplication
//! methods, error handling and matrix properties.
//!
//! Run with `RUST_LOG=debug cargo run --example basic_ops` to see dispatch logs.

use alumath_core::{
    broadcast_multiply, hadamard_product, multiply, AlumathError, Matrix, MultiplyMethod,
};

fn basic_functionality() -> Result<(), AlumathError> {
    println!("=== Basic functionality ===");
    let a = Matrix::new(vec![vec![1, 2], vec![3, 4]])?;
    let b = Matrix::new(vec![vec![5, 6], vec![7, 8]])?;
    println!("Matrix A:\n{}", a);
    println!("Matrix B:\n{}", b);
    println!("Standard product (A x B):\n{}", multiply(&a, &b, MultiplyMethod::Standard)?);
    println!("Hadamard product (A o B):\n{}", hadamard_product(&a, &b)?);
    println!();
    Ok(())
}

fn different_dimensions() -> Result<(), AlumathError> {
    println!("=== Different dimensions ===");
    let a = Matrix::new(vec![vec![1, 2, 3], vec![4, 5, 6]])?;
    let b = Matrix::new(vec![vec![7, 8], vec![9, 10], vec![11, 12]])?;
    println!("A (2x3) x B (3x2):\n{}", a.matmul(&b)?);

    let column = Matrix::new(vec![vec![1], vec![2], vec![3]])?;
    println!("A (2x3) x column (3x1):\n{}", a.matmul(&column)?);
    println!();
    Ok(())
}

fn broadcasting() -> Result<(), AlumathError> {
    println!("=== Broadcasting ===");
    let m = Matrix::new(vec![vec![1, 2], vec![3, 4]])?;
    let scalar = Matrix::new(vec![vec![3]])?;
    println!("Matrix x scalar:\n{}", broadcast_multiply(&m, &scalar)?);

    let row = Matrix::new(vec![vec![2, 3]])?;
    let ones = Matrix::new(vec![vec![1, 1], vec![1, 1]])?;
    match broadcast_multiply(&row, &ones) {
        Ok(result) => println!("Row vector x matrix:\n{}", result),
        Err(e) => println!("Broadcasting not supported for these dimensions: {}", e),
    }

    let wide = Matrix::new(vec![vec![1, 2, 3], vec![4, 5, 6]])?;
    let weights = Matrix::new(vec![vec![10, 20, 30]])?;
    println!("Element-wise with a broadcast row:\n{}", broadcast_multiply(&wide, &weights)?);
    println!();
    Ok(())
}

fn error_handling() {
    println!("=== Error handling ===");
    if let Err(e) = Matrix::new(vec![vec![1, 2], vec![3]]) {
        println!("Caught invalid matrix: {}", e);
    }

    let pair = Matrix::new(vec![vec![1, 2]]).and_then(|a| {
        let b = Matrix::new(vec![vec![3], vec![4], vec![5]])?;
        Ok((a, b))
    });
    if let Ok((a, b)) = pair {
        if let Err(e) = multiply(&a, &b, MultiplyMethod::Standard) {
            println!("Caught dimension error: {}", e);
        }
        if let Err(e) = hadamard_product(&a, &b) {
            println!("Caught dimension error for Hadamard product: {}", e);
        }
    }

    if let Err(e) = "kronecker".parse::<MultiplyMethod>() {
        println!("Caught configuration error: {}", e);
    }
    println!();
}

fn matrix_properties() -> Result<(), AlumathError> {
    println!("=== Matrix properties ===");
    let m = Matrix::new(vec![vec![1, 2, 3], vec![4, 5, 6]])?;
    println!("Matrix:\n{}", m);
    println!("Shape: {:?}", m.shape());
    println!("Rows: {}, Columns: {}", m.rows(), m.cols());
    println!("Element at (0, 1): {}", m.get(0, 1)?);
    println!("Row 0: {:?}", m.get_row(0)?);
    println!("Column 1: {:?}", m.get_column(1)?);
    println!("Transposed:\n{}", m.transpose());
    println!("Copy equals original: {}", m == m.copy());
    println!("Debug form: {:?}", m);
    println!();
    Ok(())
}

fn main() -> Result<(), AlumathError> {
    env_logger::init();

    basic_functionality()?;
    different_dimensions()?;
    broadcasting()?;
    error_handling();
    matrix_properties()?;

    println!("All demonstrations completed.");
    Ok(())
}
