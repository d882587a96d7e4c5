use actix_web::{HttpResponse, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::ApiError, model::Employee, store::EmployeeStore};

#[derive(Serialize, ToSchema)]
pub struct AverageSalaryResponse {
    #[schema(example = "Engineering")]
    pub department: String,
    #[schema(example = 87500.5)]
    pub average_salary: f64,
}

/// List every distinct department name
#[utoipa::path(
    get,
    path = "/departments",
    responses(
        (status = 200, description = "Sorted distinct department names", body = [String],
         example = json!(["Engineering", "Sales"])),
        (status = 500, description = "Internal server error")
    ),
    tag = "Department"
)]
pub async fn list_departments(store: web::Data<EmployeeStore>) -> Result<HttpResponse, ApiError> {
    let departments = store.distinct_departments().await?;
    Ok(HttpResponse::Ok().json(departments))
}

/// Employees of one department
///
/// The store cannot tell an empty department from one that never existed,
/// both answer 404.
#[utoipa::path(
    get,
    path = "/departments/{name}",
    params(
        ("name" = String, Path, description = "Exact, case-sensitive department name")
    ),
    responses(
        (status = 200, description = "Members of the department", body = [Employee]),
        (status = 404, description = "Department not found", body = Object, example = json!({
            "code": "not_found",
            "error": "Department not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Department"
)]
pub async fn list_department_employees(
    store: web::Data<EmployeeStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let department = path.into_inner();
    let employees: Vec<Employee> = store.list_by_department(&department).await?;

    if employees.is_empty() {
        return Err(ApiError::not_found("Department not found"));
    }

    Ok(HttpResponse::Ok().json(employees))
}

/// Average salary of a department
#[utoipa::path(
    get,
    path = "/average_salary/{department}",
    params(
        ("department" = String, Path, description = "Exact, case-sensitive department name")
    ),
    responses(
        (status = 200, description = "Arithmetic mean of member salaries", body = AverageSalaryResponse),
        (status = 404, description = "No employees in the department", body = Object, example = json!({
            "code": "not_found",
            "error": "No employees found in this department."
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Department"
)]
pub async fn average_salary(
    store: web::Data<EmployeeStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let department = path.into_inner();

    let Some(average_salary) = store.average_salary(&department).await? else {
        return Err(ApiError::not_found("No employees found in this department."));
    };

    Ok(HttpResponse::Ok().json(AverageSalaryResponse {
        department,
        average_salary,
    }))
}
