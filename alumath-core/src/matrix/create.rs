use crate::error::AlumathError;
use crate::matrix::{checked_numel, Matrix};
use crate::numeric::Numeric;
use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal, Uniform};

/// Creates a `rows x cols` matrix with every element set to `value`.
pub fn full<T: Numeric>(rows: usize, cols: usize, value: T) -> Result<Matrix<T>, AlumathError> {
    let len = checked_numel((rows, cols))?;
    Matrix::from_vec(vec![value; len], (rows, cols))
}

pub fn zeros<T: Numeric>(rows: usize, cols: usize) -> Result<Matrix<T>, AlumathError> {
    full(rows, cols, T::zero())
}

pub fn ones<T: Numeric>(rows: usize, cols: usize) -> Result<Matrix<T>, AlumathError> {
    full(rows, cols, T::one())
}

/// Creates a zero matrix with the same shape as `matrix`.
pub fn zeros_like<T: Numeric>(matrix: &Matrix<T>) -> Matrix<T> {
    Matrix::from_kernel_output(vec![T::zero(); matrix.numel()], matrix.rows, matrix.cols)
}

/// Creates the `n x n` identity matrix.
pub fn identity<T: Numeric>(n: usize) -> Result<Matrix<T>, AlumathError> {
    let mut m = zeros(n, n)?;
    for i in 0..n {
        let offset = m.offset(i, i);
        m.data[offset] = T::one();
    }
    Ok(m)
}

/// Creates a matrix with elements drawn uniformly from `[low, high)`,
/// using the thread-local RNG.
pub fn random_uniform<T>(
    rows: usize,
    cols: usize,
    low: T,
    high: T,
) -> Result<Matrix<T>, AlumathError>
where
    T: Numeric + SampleUniform,
{
    random_uniform_with_rng(rows, cols, low, high, &mut rand::thread_rng())
}

/// Same as [`random_uniform`] with a caller-provided RNG, for reproducible
/// matrices.
pub fn random_uniform_with_rng<T, R>(
    rows: usize,
    cols: usize,
    low: T,
    high: T,
    rng: &mut R,
) -> Result<Matrix<T>, AlumathError>
where
    T: Numeric + SampleUniform,
    R: Rng,
{
    let len = checked_numel((rows, cols))?;
    // Also rejects NaN bounds.
    if !(low < high) {
        return Err(AlumathError::InvalidArgument(format!(
            "random_uniform requires low < high, got [{}, {})",
            low, high
        )));
    }
    if !T::span_fits(low, high) {
        return Err(AlumathError::InvalidArgument(format!(
            "random_uniform range [{}, {}) is too wide for {}",
            low,
            high,
            T::TYPE_NAME
        )));
    }
    let uniform = Uniform::new(low, high);
    let data: Vec<T> = (0..len).map(|_| uniform.sample(&mut *rng)).collect();
    Matrix::from_vec(data, (rows, cols))
}

/// Creates a matrix of samples from the standard normal distribution.
pub fn randn<T>(rows: usize, cols: usize) -> Result<Matrix<T>, AlumathError>
where
    T: Numeric + Float,
    StandardNormal: Distribution<T>,
{
    randn_with_rng(rows, cols, &mut rand::thread_rng())
}

pub fn randn_with_rng<T, R>(rows: usize, cols: usize, rng: &mut R) -> Result<Matrix<T>, AlumathError>
where
    T: Numeric + Float,
    StandardNormal: Distribution<T>,
    R: Rng,
{
    let len = checked_numel((rows, cols))?;
    let data: Vec<T> = (0..len)
        .map(|_| StandardNormal.sample(&mut *rng))
        .collect();
    Matrix::from_vec(data, (rows, cols))
}
