//! Turns raw pixel rows into the (features × examples) layout the model expects.

use crate::error::{Error, Result};
use crate::math::matrix::Matrix;

/// Maximum 8-bit pixel value; dividing by it maps pixels into [0, 1].
pub const PIXEL_SCALE: f64 = 255.0;

/// Stacks one flattened example per column.
///
/// Each entry of `examples` is a single image already flattened in
/// height × width × channel order. All examples must have the same length.
pub fn flatten(examples: &[Vec<u8>]) -> Result<Matrix> {
    let features = match examples.first() {
        Some(first) => first.len(),
        None => return Err(Error::shape("example batch", (1, 1), (0, 0))),
    };

    let mut x = Matrix::zeros(features, examples.len());
    for (j, example) in examples.iter().enumerate() {
        if example.len() != features {
            return Err(Error::shape("flattened example", (features, 1), (example.len(), 1)));
        }
        for (i, &pixel) in example.iter().enumerate() {
            x.data[i][j] = pixel as f64;
        }
    }

    Ok(x)
}

/// Divides every entry by `scale`.
pub fn standardize(x: &Matrix, scale: f64) -> Matrix {
    x.map(|v| v / scale)
}

/// `flatten` followed by scaling pixels into [0, 1].
pub fn design_matrix(examples: &[Vec<u8>]) -> Result<Matrix> {
    Ok(standardize(&flatten(examples)?, PIXEL_SCALE))
}

/// Builds the (1 × m) label row. Only 0 and 1 are accepted.
pub fn label_row(labels: &[u8]) -> Result<Matrix> {
    if let Some((index, &value)) = labels.iter().enumerate().find(|&(_, &l)| l > 1) {
        return Err(Error::InvalidLabel { index, value });
    }
    let row: Vec<f64> = labels.iter().map(|&l| l as f64).collect();
    Ok(Matrix::row(&row))
}
