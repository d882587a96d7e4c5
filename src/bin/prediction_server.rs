//! Salary prediction service. Loads the trained model once and reads the
//! live department list from the record store per request.

use actix_web::middleware::{Logger, NormalizePath};
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use employee_records::{
    config::Config,
    db::DbSettings,
    logging,
    prediction::{
        SalaryModel,
        api::{self, PredictionApiDoc, PredictionState},
    },
    store::EmployeeStore,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let _guard = logging::init(&config, "prediction.log");

    let model = SalaryModel::load(&config.model_path)
        .with_context(|| format!("failed to load model from {}", config.model_path))?;
    info!(
        path = %config.model_path,
        samples = model.samples,
        trained_at = %model.trained_at,
        "Salary model loaded"
    );

    let store = EmployeeStore::open(&DbSettings::from(&config))
        .await
        .context("failed to open the record store")?;

    let state = Data::new(PredictionState {
        model,
        store: store.clone(),
    });
    let addr = config.prediction_addr.clone();

    info!(%addr, "Prediction server starting...");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", PredictionApiDoc::openapi()),
            )
            .app_data(state.clone())
            .configure(api::configure)
    })
    .bind(&addr)
    .with_context(|| format!("failed to bind {addr}"))?
    .run()
    .await?;

    store.close().await;
    Ok(())
}
