use log::{debug, info};
use serde::Serialize;

use crate::error::Result;
use crate::math::matrix::Matrix;
use crate::model::params::{initialize_with_zeros, Parameters};
use crate::model::predict::predict;
use crate::model::propagate::Gradients;
use crate::train::metrics::accuracy;
use crate::train::optimize::optimize;
use crate::train::train_config::TrainConfig;

/// Snapshot of a finished training run.
#[derive(Debug, Clone, Serialize)]
pub struct TrainedModel {
    /// Cost sampled every 100 iterations.
    pub costs: Vec<f64>,
    pub y_prediction_train: Matrix,
    pub y_prediction_test: Matrix,
    pub params: Parameters,
    /// Gradients from the last iteration.
    pub grads: Gradients,
    pub learning_rate: f64,
    pub num_iterations: usize,
    pub train_accuracy: f64,
    pub test_accuracy: f64,
}

/// Trains a logistic neuron on `(x_train, y_train)` and evaluates it on both sets.
///
/// Inputs are (features × examples) matrices with (1 × examples) 0/1 labels.
/// Errors from propagation or prediction are returned as-is; nothing is
/// retried and no partial model is produced.
pub fn train_model(
    x_train: &Matrix,
    y_train: &Matrix,
    x_test: &Matrix,
    y_test: &Matrix,
    config: &TrainConfig,
) -> Result<TrainedModel> {
    debug!(
        "training on {} examples of {} features ({} iterations, lr = {})",
        x_train.cols, x_train.rows, config.num_iterations, config.learning_rate
    );

    let params = initialize_with_zeros(x_train.rows)?;

    let trained = optimize(
        params,
        x_train,
        y_train,
        config.num_iterations,
        config.learning_rate,
        config.print_cost,
    )?;

    let y_prediction_test = predict(&trained.params, x_test)?;
    let y_prediction_train = predict(&trained.params, x_train)?;

    let train_accuracy = accuracy(&y_prediction_train, y_train)?;
    let test_accuracy = accuracy(&y_prediction_test, y_test)?;
    info!("train accuracy: {train_accuracy} %");
    info!("test accuracy: {test_accuracy} %");

    Ok(TrainedModel {
        costs: trained.costs,
        y_prediction_train,
        y_prediction_test,
        params: trained.params,
        grads: trained.grads,
        learning_rate: config.learning_rate,
        num_iterations: config.num_iterations,
        train_accuracy,
        test_accuracy,
    })
}
