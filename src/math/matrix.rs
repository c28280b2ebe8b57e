use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Wraps row-major data. Every row must have the same length.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let res = Matrix {
            rows: data.len(),
            cols: data.first().map_or(0, Vec::len),
            data
        };
        res.check_layout()?;
        Ok(res)
    }

    /// A (1 × n) matrix holding `values`.
    pub fn row(values: &[f64]) -> Matrix {
        Matrix {
            rows: 1,
            cols: values.len(),
            data: vec![values.to_vec()]
        }
    }

    /// Fails unless `data` holds exactly `rows` rows of `cols` entries each.
    pub fn check_layout(&self) -> Result<()> {
        if self.data.len() != self.rows {
            return Err(Error::shape("matrix rows", self.shape(), (self.data.len(), self.cols)));
        }
        if let Some(row) = self.data.iter().find(|row| row.len() != self.cols) {
            return Err(Error::shape("matrix row length", self.shape(), (self.rows, row.len())));
        }
        Ok(())
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    /// Element-wise combination of two same-shape matrices.
    pub fn zip_with<F>(&self, rhs: &Matrix, functor: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        self.check_layout()?;
        rhs.check_layout()?;
        if self.shape() != rhs.shape() {
            return Err(Error::shape("element-wise op", self.shape(), rhs.shape()));
        }

        let data = self.data.iter().zip(rhs.data.iter())
            .map(|(row_a, row_b)| {
                row_a.iter().zip(row_b.iter()).map(|(&a, &b)| functor(a, b)).collect()
            })
            .collect();

        Ok(Matrix { rows: self.rows, cols: self.cols, data })
    }

    pub fn checked_sub(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with(rhs, |a, b| a - b)
    }

    /// Matrix product `self · rhs`.
    pub fn dot(&self, rhs: &Matrix) -> Result<Matrix> {
        self.check_layout()?;
        rhs.check_layout()?;
        if self.cols != rhs.rows {
            return Err(Error::ShapeMismatch {
                context: "matrix product",
                expected: format!("{}xN", self.cols),
                got: format!("{}x{}", rhs.rows, rhs.cols),
            });
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for k in 0..self.cols {
                let lhs = self.data[i][k];
                for j in 0..res.cols {
                    res.data[i][j] += lhs * rhs.data[k][j];
                }
            }
        }

        Ok(res)
    }

    pub fn sum(&self) -> f64 {
        self.data.iter().flatten().sum()
    }

    /// Mean over all entries; `NaN` for an empty matrix.
    pub fn mean(&self) -> f64 {
        self.sum() / (self.rows * self.cols) as f64
    }

    /// Copies the entries out in row-major order.
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.iter().flatten().copied().collect()
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_multiplies_row_by_matrix() {
        let w = Matrix::row(&[1.0, 2.0]);
        let x = Matrix::from_data(vec![vec![1.0, 0.0, 3.0], vec![0.5, 1.0, -1.0]]).unwrap();
        let z = w.dot(&x).unwrap();
        assert_eq!(z.shape(), (1, 3));
        assert_eq!(z.data[0], vec![2.0, 2.0, 1.0]);
    }

    #[test]
    fn dot_rejects_incompatible_shapes() {
        let a = Matrix::zeros(1, 3);
        let b = Matrix::zeros(2, 2);
        assert!(matches!(a.dot(&b), Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn checked_sub_requires_equal_shapes() {
        let a = Matrix::row(&[3.0, 4.0]);
        let b = Matrix::row(&[1.0, 1.0]);
        assert_eq!(a.checked_sub(&b).unwrap().data[0], vec![2.0, 3.0]);
        assert!(a.checked_sub(&Matrix::zeros(2, 1)).is_err());
    }

    #[test]
    fn transpose_swaps_shape() {
        let m = Matrix::from_data(vec![vec![1.0, 2.0, 3.0]]).unwrap();
        let t = m.transpose();
        assert_eq!(t.shape(), (3, 1));
        assert_eq!(t.to_vec(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert!(matches!(
            Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0]]),
            Err(Error::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn malformed_fields_fail_instead_of_panicking() {
        let broken = Matrix { rows: 2, cols: 3, data: vec![vec![1.0, 2.0, 3.0]] };
        let w = Matrix::row(&[1.0, 1.0]);
        assert!(matches!(w.dot(&broken), Err(Error::ShapeMismatch { .. })));
        assert!(broken.zip_with(&broken, |a, _| a).is_err());
    }

    #[test]
    fn from_data_handles_empty_input() {
        let m = Matrix::from_data(vec![]).unwrap();
        assert_eq!(m.shape(), (0, 0));
    }
}
