use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PredictionError;
use super::features::FeatureSchema;
use super::regression::LinearModel;
use crate::store::TrainingSample;

/// The persisted salary model. The artefact carries the exact column layout
/// it was fitted on, so inference never has to rebuild it from live data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryModel {
    pub schema: FeatureSchema,
    pub columns: Vec<String>,
    pub model: LinearModel,
    pub samples: usize,
    pub trained_at: DateTime<Utc>,
}

impl SalaryModel {
    pub fn fit(samples: &[TrainingSample]) -> Result<Self, PredictionError> {
        let schema = FeatureSchema::from_departments(samples.iter().map(|s| s.department.as_str()));

        let features: Vec<Vec<f64>> = samples
            .iter()
            .map(|s| schema.encode(&s.department, s.hire_date))
            .collect();
        let targets: Vec<f64> = samples.iter().map(|s| s.salary).collect();

        let model = LinearModel::fit(&features, &targets)?;

        Ok(Self {
            columns: schema.columns(),
            schema,
            model,
            samples: samples.len(),
            trained_at: Utc::now(),
        })
    }

    pub fn predict(&self, department: &str, hire_date: NaiveDateTime) -> f64 {
        self.model.predict(&self.schema.encode(department, hire_date))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PredictionError> {
        let path = path.as_ref();
        let bytes = serde_json::to_vec_pretty(self)?;
        fs::write(path, bytes).map_err(|source| PredictionError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PredictionError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| PredictionError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let model: Self = serde_json::from_slice(&bytes)?;
        model.check_consistency()?;
        Ok(model)
    }

    fn check_consistency(&self) -> Result<(), PredictionError> {
        if self.columns != self.schema.columns() {
            return Err(PredictionError::SchemaMismatch(format!(
                "recorded columns {:?} do not match departments {:?}",
                self.columns,
                self.schema.departments()
            )));
        }
        if self.model.coefficients.len() != self.schema.width() {
            return Err(PredictionError::SchemaMismatch(format!(
                "{} coefficients for {} columns",
                self.model.coefficients.len(),
                self.schema.width()
            )));
        }
        Ok(())
    }
}
