use crate::error::Result;
use crate::math::matrix::Matrix;
use crate::model::params::Parameters;
use crate::model::propagate::linear_activation;

/// Decision threshold; a probability must be strictly above it to be class 1.
pub const THRESHOLD: f64 = 0.5;

/// Probabilities `σ(wᵀX + b)`, shape (1 × m).
pub fn predict_proba(params: &Parameters, x: &Matrix) -> Result<Matrix> {
    linear_activation(params, x)
}

/// Hard 0/1 predictions, shape (1 × m). Ties at exactly 0.5 go to class 0.
pub fn predict(params: &Parameters, x: &Matrix) -> Result<Matrix> {
    let probabilities = predict_proba(params, x)?;
    Ok(probabilities.map(|p| if p > THRESHOLD { 1.0 } else { 0.0 }))
}
