use crate::math::matrix::Matrix;

/// Logistic function `1 / (1 + e^-z)`.
///
/// No clipping is applied: for very negative `z`, `exp(-z)` overflows to
/// `+inf` and the result is exactly `0.0`; for very positive `z` the result
/// rounds to `1.0`. Both limits are quiet under IEEE-754.
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Element-wise sigmoid; the output has the same shape as `z`.
pub fn sigmoid_matrix(z: &Matrix) -> Matrix {
    z.map(sigmoid)
}
