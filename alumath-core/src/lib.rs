//! Dense 2-D matrices and three ways to multiply them: the standard matrix
//! product, the element-wise (Hadamard) product, and a simplified
//! broadcasting product.
//!
//! ```
//! use alumath_core::{multiply, Matrix, MultiplyMethod};
//!
//! let a = Matrix::new(vec![vec![1, 2], vec![3, 4]])?;
//! let b = Matrix::new(vec![vec![5, 6], vec![7, 8]])?;
//! let c = multiply(&a, &b, MultiplyMethod::Standard)?;
//! assert_eq!(c.to_vec(), vec![vec![19, 22], vec![43, 50]]);
//! # Ok::<(), alumath_core::AlumathError>(())
//! ```

pub mod error;
pub mod matrix;
pub mod numeric;
pub mod ops;
pub mod types;
pub mod utils;

// Re-export the main types so they are reachable as `alumath_core::Matrix` etc.
pub use error::{AlumathError, ErrorKind};
pub use matrix::create::{
    full, identity, ones, randn, randn_with_rng, random_uniform, random_uniform_with_rng, zeros,
    zeros_like,
};
pub use matrix::Matrix;
pub use numeric::Numeric;
pub use ops::{broadcast_multiply, hadamard_product, multiply, multiply_by_name, MultiplyMethod};
pub use types::{Axis, Shape};
// Re-export traits required by public functions/structs
pub use num_traits;
