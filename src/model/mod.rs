pub mod params;
pub mod propagate;
pub mod predict;

pub use params::{initialize_with_zeros, Parameters};
pub use propagate::{propagate, Gradients, Propagation};
pub use predict::{predict, predict_proba};
