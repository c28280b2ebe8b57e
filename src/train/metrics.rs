use crate::error::{Error, Result};
use crate::math::matrix::Matrix;

/// Percentage of hard predictions that match the labels:
/// `100 - 100 · mean(|prediction - label|)`. Zero examples is an error.
pub fn accuracy(predictions: &Matrix, labels: &Matrix) -> Result<f64> {
    if predictions.rows == 0 || predictions.cols == 0 {
        return Err(Error::shape("accuracy", (1, 1), predictions.shape()));
    }
    let errors = predictions.zip_with(labels, |p, y| (p - y).abs())?;
    Ok(100.0 - errors.mean() * 100.0)
}
