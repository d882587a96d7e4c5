use actix_web::{HttpResponse, web};

use crate::{
    error::ApiError,
    model::{RecentHire, TopEarner},
    store::EmployeeStore,
};

/// Length of the top-earner and recent-hire lists.
pub const RANKING_LIMIT: u32 = 10;

/// Top 10 earners
#[utoipa::path(
    get,
    path = "/top_earners",
    responses(
        (status = 200, description = "Highest salaries first, at most 10 entries", body = [TopEarner]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Ranking"
)]
pub async fn top_earners(store: web::Data<EmployeeStore>) -> Result<HttpResponse, ApiError> {
    let earners: Vec<TopEarner> = store.top_k_by_salary(RANKING_LIMIT).await?;
    Ok(HttpResponse::Ok().json(earners))
}

/// 10 most recent hires
#[utoipa::path(
    get,
    path = "/most_recent_hires",
    responses(
        (status = 200, description = "Latest hire dates first, at most 10 entries", body = [RecentHire]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Ranking"
)]
pub async fn most_recent_hires(store: web::Data<EmployeeStore>) -> Result<HttpResponse, ApiError> {
    let hires: Vec<RecentHire> = store.most_recent_k_hires(RANKING_LIMIT).await?;
    Ok(HttpResponse::Ok().json(hires))
}
