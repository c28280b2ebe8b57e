pub mod error;
pub mod math;
pub mod activation;
pub mod model;
pub mod optim;
pub mod train;
pub mod data;

// Convenience re-exports
pub use error::{Error, Result};
pub use math::matrix::Matrix;
pub use activation::sigmoid::sigmoid;
pub use model::params::{initialize_with_zeros, Parameters};
pub use model::propagate::{propagate, Gradients, Propagation};
pub use model::predict::predict;
pub use optim::gd::GradientDescent;
pub use train::optimize::{optimize, Optimization};
pub use train::model::{train_model, TrainedModel};
pub use train::train_config::TrainConfig;
pub use data::dataset::Dataset;
