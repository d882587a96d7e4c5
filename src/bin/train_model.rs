//! Offline trainer: reads the record store once, fits the salary model and
//! writes it to `MODEL_PATH`.

use anyhow::Context;
use tracing::{error, info};

use employee_records::{
    config::Config, db::DbSettings, logging, prediction::trainer, store::EmployeeStore,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let _guard = logging::init(&config, "trainer.log");

    info!(database = %config.database_url, "Training salary model");

    let store = EmployeeStore::open(&DbSettings::from(&config))
        .await
        .context("failed to open the record store")?;

    let result = trainer::train_and_save(&store, &config.model_path).await;
    store.close().await;

    match result {
        Ok(model) => {
            println!(
                "Model trained on {} rows, written to {}",
                model.samples, config.model_path
            );
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Training failed");
            Err(e).context("training failed")
        }
    }
}
