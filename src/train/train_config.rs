use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};

pub const DEFAULT_NUM_ITERATIONS: usize = 2000;
pub const DEFAULT_LEARNING_RATE: f64 = 0.5;

/// Hyperparameters for a training run.
///
/// # Fields
/// - `num_iterations` — number of full-batch gradient steps
/// - `learning_rate`  — step size α; must be positive and finite
/// - `print_cost`     — log the cost every 100 iterations at `info` level
///
/// Missing fields in a JSON config fall back to the defaults
/// (2000 iterations, α = 0.5, quiet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub num_iterations: usize,
    pub learning_rate: f64,
    pub print_cost: bool,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            num_iterations: DEFAULT_NUM_ITERATIONS,
            learning_rate: DEFAULT_LEARNING_RATE,
            print_cost: false,
        }
    }
}

impl TrainConfig {
    pub fn new(num_iterations: usize, learning_rate: f64, print_cost: bool) -> Self {
        TrainConfig { num_iterations, learning_rate, print_cost }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "learning_rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Reads a config previously written by `save_json` (or by hand).
    pub fn load_json(path: &str) -> Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: TrainConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}
