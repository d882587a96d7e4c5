use actix_web::middleware::{Logger, NormalizePath};
use actix_web::web::Data;
use actix_web::{App, HttpServer, Responder, get};
use anyhow::Context;
use tracing::info;
use utoipa_swagger_ui::SwaggerUi;

use employee_records::{
    config::Config, db::DbSettings, docs, logging, routes, store::EmployeeStore,
};

#[get("/")]
async fn index() -> impl Responder {
    "Employee records service"
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let _guard = logging::init(&config, "records.log");

    info!(addr = %config.server_addr, "Server starting...");

    let store = EmployeeStore::open(&DbSettings::from(&config))
        .await
        .context("failed to open the record store")?;

    let server_addr = config.server_addr.clone();
    let api_doc = docs::openapi_for(&config);
    let app_store = store.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // ← wildcard {_:.*} to match JS/CSS files
                    .url("/api-doc/openapi.json", api_doc.clone()),
            )
            .app_data(Data::new(app_store.clone()))
            .service(index)
            .configure(|cfg| routes::configure(cfg, &config))
    })
    .bind(&server_addr)
    .with_context(|| format!("failed to bind {server_addr}"))?
    .run()
    .await?;

    store.close().await;
    info!("Server stopped");
    Ok(())
}
