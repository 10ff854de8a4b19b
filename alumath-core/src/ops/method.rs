use crate::error::AlumathError;
use crate::matrix::Matrix;
use crate::numeric::Numeric;
use crate::ops::arithmetic::hadamard_op;
use crate::ops::broadcast::broadcast_mul_op;
use crate::ops::linalg::matmul_op;
use log::debug;
use std::fmt;
use std::str::FromStr;

/// Selects which multiplication [`multiply`] performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MultiplyMethod {
    /// Row-by-column matrix product.
    #[default]
    Standard,
    /// Element-wise product of equally-shaped matrices.
    Hadamard,
    /// Shape-driven choice between scaling, product and element-wise broadcast.
    Broadcast,
}

impl MultiplyMethod {
    pub const ALL: [MultiplyMethod; 3] = [
        MultiplyMethod::Standard,
        MultiplyMethod::Hadamard,
        MultiplyMethod::Broadcast,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MultiplyMethod::Standard => "standard",
            MultiplyMethod::Hadamard => "hadamard",
            MultiplyMethod::Broadcast => "broadcast",
        }
    }
}

impl fmt::Display for MultiplyMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MultiplyMethod {
    type Err = AlumathError;

    /// Accepts the canonical names in any case, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        MultiplyMethod::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| AlumathError::UnknownMethod(s.to_string()))
    }
}

/// Multiplies `a` by `b` with the selected method.
pub fn multiply<T: Numeric>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    method: MultiplyMethod,
) -> Result<Matrix<T>, AlumathError> {
    debug!("multiply: {} on {:?} and {:?}", method, a.shape(), b.shape());
    match method {
        MultiplyMethod::Standard => matmul_op(a, b),
        MultiplyMethod::Hadamard => hadamard_op(a, b),
        MultiplyMethod::Broadcast => broadcast_mul_op(a, b),
    }
}

/// Parses `method` and multiplies. Unknown names fail with
/// [`AlumathError::UnknownMethod`] before any shape is looked at.
pub fn multiply_by_name<T: Numeric>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    method: &str,
) -> Result<Matrix<T>, AlumathError> {
    let method = method.parse::<MultiplyMethod>()?;
    multiply(a, b, method)
}

/// Element-wise product; same as `multiply(a, b, MultiplyMethod::Hadamard)`.
pub fn hadamard_product<T: Numeric>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, AlumathError> {
    multiply(a, b, MultiplyMethod::Hadamard)
}

/// Broadcasting product; same as `multiply(a, b, MultiplyMethod::Broadcast)`.
pub fn broadcast_multiply<T: Numeric>(
    a: &Matrix<T>,
    b: &Matrix<T>,
) -> Result<Matrix<T>, AlumathError> {
    multiply(a, b, MultiplyMethod::Broadcast)
}
