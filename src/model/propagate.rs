use serde::{Serialize, Deserialize};

use crate::activation::sigmoid::sigmoid_matrix;
use crate::error::{Error, Result};
use crate::math::matrix::Matrix;
use crate::model::params::Parameters;

/// Gradients of the cost with respect to `w` and `b`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradients {
    pub dw: Vec<f64>,
    pub db: f64,
}

impl Gradients {
    pub fn zeros(dim: usize) -> Gradients {
        Gradients { dw: vec![0.0; dim], db: 0.0 }
    }
}

/// Result of one forward + backward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Propagation {
    pub grads: Gradients,
    pub cost: f64,
}

/// Forward pass: `A = σ(wᵀX + b)`, shape (1 × m).
///
/// Fails if `w` does not have one entry per row of `x`, or if `x` holds no
/// examples.
pub fn linear_activation(params: &Parameters, x: &Matrix) -> Result<Matrix> {
    x.check_layout()?;
    if params.dim() != x.rows {
        return Err(Error::shape("weights vs features", (params.dim(), 1), (x.rows, 1)));
    }
    if x.cols == 0 {
        return Err(Error::shape("example batch", (x.rows, 1), x.shape()));
    }

    let b = params.b;
    let z = Matrix::row(&params.w).dot(x)?.map(|v| v + b);
    Ok(sigmoid_matrix(&z))
}

/// Cross-entropy cost and its gradients for a labelled batch.
///
/// `x` is (n × m) with one example per column, `y` is (1 × m). The cost is
/// not clamped: a probability of exactly 0 or 1 yields an infinite or NaN
/// cost, as `ln` does.
pub fn propagate(params: &Parameters, x: &Matrix, y: &Matrix) -> Result<Propagation> {
    if y.rows != 1 || y.cols != x.cols {
        return Err(Error::shape("labels vs examples", (1, x.cols), y.shape()));
    }

    let a = linear_activation(params, x)?;
    let m = x.cols as f64;

    let log_likelihood = y.zip_with(&a, |y, a| y * a.ln() + (1.0 - y) * (1.0 - a).ln())?;
    let cost = -log_likelihood.sum() / m;

    // dZ = A - Y
    let dz = a.checked_sub(y)?;
    let dw = x.dot(&dz.transpose())?.map(|v| v / m).to_vec();
    let db = dz.sum() / m;

    Ok(Propagation {
        grads: Gradients { dw, db },
        cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn zero_parameters_give_half_probabilities() {
        let params = Parameters::new(vec![0.0], 0.0);
        let x = Matrix::from_data(vec![vec![0.0, 1.0]]).unwrap();
        let y = Matrix::from_data(vec![vec![0.0, 1.0]]).unwrap();

        let a = linear_activation(&params, &x).unwrap();
        assert_eq!(a.data[0], vec![0.5, 0.5]);

        let out = propagate(&params, &x, &y).unwrap();
        assert!((out.cost - std::f64::consts::LN_2).abs() < TOL);
        // A - Y = [0.5, -0.5]
        assert!((out.grads.dw[0] + 0.25).abs() < TOL);
        assert!(out.grads.db.abs() < TOL);
    }

    #[test]
    fn gradient_shapes_follow_parameters() {
        let params = Parameters::new(vec![1.0, -2.0, 0.5], 0.1);
        let x = Matrix::from_data(vec![
            vec![1.0, 2.0, -1.0, 0.0],
            vec![3.0, 0.5, -3.2, 1.0],
            vec![2.0, 1.0, 0.3, 0.0],
        ]).unwrap();
        let y = Matrix::row(&[1.0, 0.0, 1.0, 0.0]);

        let out = propagate(&params, &x, &y).unwrap();
        assert_eq!(out.grads.dw.len(), params.w.len());
        assert!(out.cost.is_finite() && out.cost > 0.0);
    }

    #[test]
    fn matches_hand_computed_gradients() {
        let params = Parameters::new(vec![1.0, 2.0], 2.0);
        let x = Matrix::from_data(vec![vec![1.0, 3.0], vec![2.0, 4.0]]).unwrap();
        let y = Matrix::row(&[1.0, 0.0]);

        let out = propagate(&params, &x, &y).unwrap();

        let a1 = 1.0 / (1.0 + (-7.0f64).exp());
        let a2 = 1.0 / (1.0 + (-13.0f64).exp());
        let cost = -((a1).ln() + (1.0 - a2).ln()) / 2.0;
        let dw0 = ((a1 - 1.0) * 1.0 + a2 * 3.0) / 2.0;
        let dw1 = ((a1 - 1.0) * 2.0 + a2 * 4.0) / 2.0;
        let db = ((a1 - 1.0) + a2) / 2.0;

        assert!((out.cost - cost).abs() < 1e-9);
        assert!((out.grads.dw[0] - dw0).abs() < 1e-9);
        assert!((out.grads.dw[1] - dw1).abs() < 1e-9);
        assert!((out.grads.db - db).abs() < 1e-9);
    }

    #[test]
    fn rejects_label_count_mismatch() {
        let params = Parameters::new(vec![0.0], 0.0);
        let x = Matrix::row(&[0.0, 1.0, 2.0]);
        let y = Matrix::row(&[0.0, 1.0]);
        assert!(matches!(propagate(&params, &x, &y), Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn rejects_feature_count_mismatch() {
        let params = Parameters::new(vec![0.0, 0.0], 0.0);
        let x = Matrix::row(&[0.0, 1.0]);
        let y = Matrix::row(&[0.0, 1.0]);
        assert!(matches!(propagate(&params, &x, &y), Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn rejects_ragged_examples() {
        let params = Parameters::new(vec![0.0, 0.0], 0.0);
        let y = Matrix::row(&[0.0, 1.0]);

        let x = Matrix { rows: 2, cols: 2, data: vec![vec![1.0, 2.0], vec![3.0]] };
        assert!(matches!(propagate(&params, &x, &y), Err(Error::ShapeMismatch { .. })));

        let x = Matrix { rows: 2, cols: 3, data: vec![vec![1.0, 2.0, 3.0]] };
        let y = Matrix::row(&[0.0, 1.0, 1.0]);
        assert!(matches!(propagate(&params, &x, &y), Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn rejects_empty_batch() {
        let params = Parameters::new(vec![0.0], 0.0);
        let x = Matrix::zeros(1, 0);
        let y = Matrix::zeros(1, 0);
        assert!(matches!(propagate(&params, &x, &y), Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn saturated_prediction_is_not_an_error() {
        let params = Parameters::new(vec![1000.0], 0.0);
        let x = Matrix::row(&[1.0]);
        let y = Matrix::row(&[0.0]);
        let out = propagate(&params, &x, &y).unwrap();
        assert!(!out.cost.is_finite());
    }
}
