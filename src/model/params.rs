use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};

/// Weights and bias of the single logistic neuron.
///
/// `w` has one entry per input feature (flattened pixel).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    pub w: Vec<f64>,
    pub b: f64,
}

impl Parameters {
    pub fn new(w: Vec<f64>, b: f64) -> Parameters {
        Parameters { w, b }
    }

    /// Number of input features these parameters expect.
    pub fn dim(&self) -> usize {
        self.w.len()
    }
}

/// Zero weights of length `dim` and a zero bias.
pub fn initialize_with_zeros(dim: usize) -> Result<Parameters> {
    if dim == 0 {
        return Err(Error::InvalidDimension { dim });
    }
    Ok(Parameters { w: vec![0.0; dim], b: 0.0 })
}
