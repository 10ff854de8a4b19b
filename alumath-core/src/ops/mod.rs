//! # Matrix Operations Module (`ops`)
//!
//! Stateless multiplication algorithms. Every function takes its operands by
//! reference, validates their shapes, and returns a freshly allocated
//! [`Matrix`](crate::Matrix); nothing here holds state between calls.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** each operation has a core function (`matmul_op`,
//!   `hadamard_op`, `broadcast_mul_op`, ...). The same operations are also
//!   available as methods on `Matrix` (`matmul`, `hadamard`, `broadcast_mul`,
//!   `scale`).
//! - [`method`]: the [`MultiplyMethod`](method::MultiplyMethod) selector and
//!   the [`multiply`](method::multiply) dispatch entry point.
//!
//! ## Key Submodules:
//!
//! - [`linalg`]: the standard matrix product.
//! - [`arithmetic`]: element-wise products (Hadamard, scalar).
//! - [`broadcast`]: broadcast shape resolution and the broadcasting product.

pub mod arithmetic;
pub mod broadcast;
pub mod linalg;
pub mod method;

pub use arithmetic::{hadamard_op, scalar_mul_op};
pub use broadcast::{
    broadcast_elementwise_op, broadcast_mul_op, can_broadcast, resolve_broadcast, BroadcastPlan,
    BroadcastRule,
};
pub use linalg::matmul_op;
pub use method::{broadcast_multiply, hadamard_product, multiply, multiply_by_name, MultiplyMethod};
