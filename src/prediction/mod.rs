//! Salary prediction collaborator.
//!
//! The trainer fits a [`SalaryModel`] on a snapshot of the record store and
//! writes it to disk; the prediction endpoint loads it and answers
//! `(department, hire_date)` queries.

pub mod api;
pub mod features;
pub mod model;
pub mod regression;
pub mod trainer;

use thiserror::Error;

use crate::store::StoreError;

pub use features::{FeatureSchema, SchemaDrift};
pub use model::SalaryModel;
pub use regression::{FitError, LinearModel};

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("model fit failed: {0}")]
    Fit(#[from] FitError),

    #[error("model file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("model file is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),

    #[error("model schema mismatch: {0}")]
    SchemaMismatch(String),
}
