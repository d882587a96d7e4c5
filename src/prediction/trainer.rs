use std::path::Path;

use tracing::info;

use super::{PredictionError, SalaryModel};
use crate::store::EmployeeStore;

/// Rows read between progress log lines.
pub const SNAPSHOT_BATCH: usize = 500;

/// Reads one snapshot from the store, fits the model and writes it to `path`.
pub async fn train_and_save(
    store: &EmployeeStore,
    path: impl AsRef<Path>,
) -> Result<SalaryModel, PredictionError> {
    let samples = store.training_samples(SNAPSHOT_BATCH).await?;
    let model = SalaryModel::fit(&samples)?;

    model.save(&path)?;

    info!(
        samples = model.samples,
        departments = model.schema.departments().len(),
        intercept = model.model.intercept,
        path = %path.as_ref().display(),
        "Salary model trained"
    );

    Ok(model)
}
