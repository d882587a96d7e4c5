use actix_web::{HttpResponse, web};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use utoipa::{OpenApi, ToSchema};

use super::SalaryModel;
use crate::{
    error::{ApiError, json_config},
    model::datetime,
    store::EmployeeStore,
};

/// Everything the prediction endpoint needs, injected as app data.
pub struct PredictionState {
    pub model: SalaryModel,
    pub store: EmployeeStore,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct PredictionRequest {
    #[schema(example = "Engineering")]
    pub department: String,
    #[serde(with = "datetime")]
    #[schema(example = "2023-05-01 00:00:00", value_type = String, format = "date-time")]
    pub hire_date: NaiveDateTime,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PredictionResponse {
    #[schema(example = "Engineering")]
    pub department: String,
    #[schema(example = 84250.0)]
    pub predicted_salary: f64,
}

/// Predict a salary
///
/// Features are encoded with the column layout saved by the trainer. Drift
/// between that layout and the live department list is logged, not repaired.
#[utoipa::path(
    post,
    path = "/predict_salary",
    request_body = PredictionRequest,
    responses(
        (status = 200, description = "Predicted salary", body = PredictionResponse),
        (status = 400, description = "Malformed body"),
        (status = 404, description = "Department not found", body = Object, example = json!({
            "code": "not_found",
            "error": "Department not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Prediction"
)]
pub async fn predict_salary(
    state: web::Data<PredictionState>,
    payload: web::Json<PredictionRequest>,
) -> Result<HttpResponse, ApiError> {
    let PredictionRequest {
        department,
        hire_date,
    } = payload.into_inner();

    let live = state.store.distinct_departments().await?;
    if !live.contains(&department) {
        return Err(ApiError::not_found("Department not found"));
    }

    let drift = state.model.schema.drift(&live);
    if !drift.is_empty() {
        warn!(
            unseen_by_model = ?drift.unseen_by_model,
            missing_from_store = ?drift.missing_from_store,
            "Department set changed since the model was trained"
        );
    }
    if !state.model.schema.knows(&department) {
        warn!(%department, "Department unknown to the model, predicting from baseline");
    }

    let predicted_salary = state.model.predict(&department, hire_date);
    debug!(%department, %hire_date, predicted_salary, "Salary predicted");

    Ok(HttpResponse::Ok().json(PredictionResponse {
        department,
        predicted_salary,
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(web::resource("/predict_salary").route(web::post().to(predict_salary)));
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Salary Prediction API",
        version = "1.0.0",
        description = "Predicts a salary from department and hire date using the trained linear model."
    ),
    paths(predict_salary),
    components(schemas(PredictionRequest, PredictionResponse)),
    tags((name = "Prediction", description = "Salary prediction"))
)]
pub struct PredictionApiDoc;
