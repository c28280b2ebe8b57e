use log::debug;

use crate::error::Result;
use crate::math::matrix::Matrix;
use crate::data::preprocess::{design_matrix, label_row};

/// Train and test splits ready for `train_model`.
///
/// `*_x` are (features × examples), `*_y` are (1 × examples).
/// `classes[0]` names label 0 and `classes[1]` names label 1.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub train_x: Matrix,
    pub train_y: Matrix,
    pub test_x: Matrix,
    pub test_y: Matrix,
    pub classes: Vec<String>,
}

impl Dataset {
    /// Preprocesses raw 8-bit images (one flattened `Vec<u8>` each) and their labels.
    pub fn from_raw(
        train_images: &[Vec<u8>],
        train_labels: &[u8],
        test_images: &[Vec<u8>],
        test_labels: &[u8],
        classes: Vec<String>,
    ) -> Result<Dataset> {
        let dataset = Dataset {
            train_x: design_matrix(train_images)?,
            train_y: label_row(train_labels)?,
            test_x: design_matrix(test_images)?,
            test_y: label_row(test_labels)?,
            classes,
        };

        debug!(
            "dataset: {} train / {} test examples, {} features, classes {:?}",
            dataset.m_train(),
            dataset.m_test(),
            dataset.num_features(),
            dataset.classes
        );

        Ok(dataset)
    }

    pub fn m_train(&self) -> usize {
        self.train_x.cols
    }

    pub fn m_test(&self) -> usize {
        self.test_x.cols
    }

    pub fn num_features(&self) -> usize {
        self.train_x.rows
    }

    /// Class name for a hard 0/1 prediction; `None` for any other value.
    pub fn class_name(&self, prediction: f64) -> Option<&str> {
        let index = if prediction == 0.0 {
            0
        } else if prediction == 1.0 {
            1
        } else {
            return None;
        };
        self.classes.get(index).map(String::as_str)
    }
}
