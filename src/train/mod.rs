pub mod model;
pub mod metrics;
pub mod optimize;
pub mod train_config;

pub use model::{train_model, TrainedModel};
pub use metrics::accuracy;
pub use optimize::{optimize, Optimization, COST_INTERVAL};
pub use train_config::TrainConfig;
