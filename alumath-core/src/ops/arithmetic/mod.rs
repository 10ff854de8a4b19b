// Element-wise multiplication kernels
pub mod mul;

pub use mul::{hadamard_op, scalar_mul_op};
