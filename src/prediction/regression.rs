//! Ordinary least squares with an intercept.
//!
//! Features and target are centered, then the normal equations are solved by
//! Gaussian elimination with partial pivoting. One-hot blocks are collinear
//! once centered, so a tiny ridge term keeps the system solvable; it picks
//! the small-norm solution among the equivalent fits.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const RIDGE: f64 = 1e-6;
const PIVOT_EPSILON: f64 = 1e-12;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    #[error("cannot fit a model without samples")]
    NoSamples,

    #[error("row {row} has {got} features, expected {expected}")]
    DimensionMismatch {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("{features} feature rows but {targets} targets")]
    TargetMismatch { features: usize, targets: usize },

    #[error("normal equations are singular")]
    Singular,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl LinearModel {
    pub fn fit(features: &[Vec<f64>], targets: &[f64]) -> Result<Self, FitError> {
        if features.is_empty() {
            return Err(FitError::NoSamples);
        }
        if features.len() != targets.len() {
            return Err(FitError::TargetMismatch {
                features: features.len(),
                targets: targets.len(),
            });
        }

        let width = features[0].len();
        if let Some((row, r)) = features.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(FitError::DimensionMismatch {
                row,
                expected: width,
                got: r.len(),
            });
        }

        let n = features.len() as f64;
        let y_mean = targets.iter().sum::<f64>() / n;
        let mut x_mean = vec![0.0; width];
        for row in features {
            for (m, v) in x_mean.iter_mut().zip(row) {
                *m += v / n;
            }
        }

        // (Xc'Xc + ridge * I) b = Xc'yc
        let mut gram = vec![vec![0.0; width]; width];
        let mut rhs = vec![0.0; width];
        let mut centered = vec![0.0; width];
        for (row, y) in features.iter().zip(targets) {
            for (c, (v, m)) in centered.iter_mut().zip(row.iter().zip(&x_mean)) {
                *c = v - m;
            }
            let yc = y - y_mean;
            for i in 0..width {
                rhs[i] += centered[i] * yc;
                for j in i..width {
                    gram[i][j] += centered[i] * centered[j];
                }
            }
        }
        for i in 0..width {
            gram[i][i] += RIDGE;
            for j in 0..i {
                gram[i][j] = gram[j][i];
            }
        }

        let coefficients = solve(gram, rhs)?;
        let intercept = y_mean
            - coefficients
                .iter()
                .zip(&x_mean)
                .map(|(b, m)| b * m)
                .sum::<f64>();

        Ok(Self {
            intercept,
            coefficients,
        })
    }

    /// `x` must have one value per coefficient; extra or missing values are
    /// ignored or treated as zero.
    pub fn predict(&self, x: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(x)
                .map(|(b, v)| b * v)
                .sum::<f64>()
    }
}

fn solve(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Result<Vec<f64>, FitError> {
    let n = b.len();

    for col in 0..n {
        let pivot = (col..n)
            .max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))
            .unwrap_or(col);
        if a[pivot][col].abs() < PIVOT_EPSILON {
            return Err(FitError::Singular);
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in col + 1..n {
            let factor = a[row][col] / a[col][col];
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let tail: f64 = (row + 1..n).map(|k| a[row][k] * x[k]).sum();
        x[row] = (b[row] - tail) / a[row][row];
    }
    Ok(x)
}
