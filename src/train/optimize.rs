use log::{info, warn};

use crate::error::Result;
use crate::math::matrix::Matrix;
use crate::model::params::Parameters;
use crate::model::propagate::{propagate, Gradients};
use crate::optim::gd::GradientDescent;

/// The cost is sampled every this many iterations, starting at iteration 0.
pub const COST_INTERVAL: usize = 100;

/// Outcome of `optimize`: final parameters, the last gradients computed and
/// the sampled cost history.
#[derive(Debug, Clone, PartialEq)]
pub struct Optimization {
    pub params: Parameters,
    pub grads: Gradients,
    pub costs: Vec<f64>,
}

/// Runs `num_iterations` steps of batch gradient descent starting from `params`.
///
/// The cost recorded at iteration `i` (for `i % 100 == 0`) is the one computed
/// from the parameters entering that iteration, before its update. With
/// `num_iterations == 0` the parameters come back unchanged, with zero
/// gradients and an empty history.
pub fn optimize(
    mut params: Parameters,
    x: &Matrix,
    y: &Matrix,
    num_iterations: usize,
    learning_rate: f64,
    print_cost: bool,
) -> Result<Optimization> {
    let optimizer = GradientDescent::new(learning_rate);
    let mut grads = Gradients::zeros(params.dim());
    let mut costs = Vec::with_capacity(num_iterations.div_ceil(COST_INTERVAL));

    for i in 0..num_iterations {
        let step = propagate(&params, x, y)?;

        optimizer.step(&mut params, &step.grads);
        grads = step.grads;

        if i % COST_INTERVAL == 0 {
            costs.push(step.cost);

            if print_cost {
                info!("Cost after iteration {i}: {:.6}", step.cost);
            }
            if !step.cost.is_finite() {
                warn!("cost is {} at iteration {i}; predictions have saturated", step.cost);
            }
        }
    }

    Ok(Optimization { params, grads, costs })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy() -> (Matrix, Matrix) {
        let x = Matrix::from_data(vec![
            vec![0.1, 0.2, 0.8, 0.9],
            vec![0.2, 0.1, 0.9, 0.7],
        ]).unwrap();
        let y = Matrix::row(&[0.0, 0.0, 1.0, 1.0]);
        (x, y)
    }

    #[test]
    fn zero_iterations_is_a_no_op() {
        let (x, y) = toy();
        let start = Parameters::new(vec![0.3, -0.2], 0.1);
        for lr in [0.0, 0.5, 100.0] {
            let out = optimize(start.clone(), &x, &y, 0, lr, false).unwrap();
            assert_eq!(out.params, start);
            assert!(out.costs.is_empty());
            assert_eq!(out.grads, Gradients::zeros(2));
        }
    }

    #[test]
    fn records_one_cost_per_hundred_iterations() {
        let (x, y) = toy();
        let start = Parameters::new(vec![0.0, 0.0], 0.0);
        assert_eq!(optimize(start.clone(), &x, &y, 1, 0.1, false).unwrap().costs.len(), 1);
        assert_eq!(optimize(start.clone(), &x, &y, 100, 0.1, false).unwrap().costs.len(), 1);
        assert_eq!(optimize(start.clone(), &x, &y, 101, 0.1, false).unwrap().costs.len(), 2);
        assert_eq!(optimize(start, &x, &y, 250, 0.1, true).unwrap().costs.len(), 3);
    }

    #[test]
    fn first_cost_reflects_initial_parameters() {
        let (x, y) = toy();
        let start = Parameters::new(vec![0.0, 0.0], 0.0);
        let out = optimize(start, &x, &y, 5, 0.5, false).unwrap();
        assert!((out.costs[0] - std::f64::consts::LN_2).abs() < 1e-12);
    }

    #[test]
    fn single_iteration_matches_manual_update() {
        let (x, y) = toy();
        let start = Parameters::new(vec![0.0, 0.0], 0.0);
        let grads = propagate(&start, &x, &y).unwrap().grads;

        let out = optimize(start, &x, &y, 1, 0.5, false).unwrap();

        assert_eq!(out.grads, grads);
        for (w, dw) in out.params.w.iter().zip(grads.dw.iter()) {
            assert!((w + 0.5 * dw).abs() < 1e-12);
        }
        assert!((out.params.b + 0.5 * grads.db).abs() < 1e-12);
    }

    #[test]
    fn cost_decreases_on_separable_data() {
        let (x, y) = toy();
        let start = Parameters::new(vec![0.0, 0.0], 0.0);
        let out = optimize(start, &x, &y, 101, 0.5, false).unwrap();
        assert_eq!(out.costs.len(), 2);
        assert!(out.costs[1] < out.costs[0]);
    }

    #[test]
    fn propagates_shape_errors() {
        let (x, _) = toy();
        let y = Matrix::row(&[0.0, 1.0]);
        let start = Parameters::new(vec![0.0, 0.0], 0.0);
        assert!(optimize(start, &x, &y, 10, 0.5, false).is_err());
    }
}
