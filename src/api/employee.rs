use crate::{
    error::ApiError,
    model::{EmployeePatch, NewEmployee},
    store::EmployeeStore,
};
use actix_web::{HttpResponse, web};
use serde::Serialize;
use tracing::debug;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct CreatedResponse {
    #[schema(example = 1)]
    pub id: i64,
}

#[derive(Serialize, ToSchema)]
pub struct DeletedResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Employee information deleted")]
    pub message: String,
}

/// List all employees
#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "Every employee record", body = [Employee]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn list_employees(store: web::Data<EmployeeStore>) -> Result<HttpResponse, ApiError> {
    let employees = store.list_all().await?;
    debug!(count = employees.len(), "Listing employees");
    Ok(HttpResponse::Ok().json(employees))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/employees/{employee_id}",
    params(
        ("employee_id" = i64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 400, description = "Employee ID is not a number"),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "code": "not_found",
            "error": "Employee not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    store: web::Data<EmployeeStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let employee = store.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/employees",
    request_body = NewEmployee,
    responses(
        (status = 201, description = "Employee created, returns the assigned id", body = CreatedResponse),
        (status = 400, description = "Malformed or missing fields"),
        (status = 422, description = "Salary or hire_date out of range", body = Object, example = json!({
            "code": "validation_failed",
            "error": "salary must be greater than 0 and less than 1000000, got 2000000"
        })),
        (status = 500, description = "Internal server error", body = Object, example = json!({
            "code": "internal_error",
            "error": "Something went wrong, Contact with system admin"
        }))
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    store: web::Data<EmployeeStore>,
    payload: web::Json<NewEmployee>,
) -> Result<HttpResponse, ApiError> {
    let id = store.create(&payload).await?;
    Ok(HttpResponse::Created().json(CreatedResponse { id }))
}

/// Update Employee
///
/// Only the fields present in the body change.
#[utoipa::path(
    put,
    path = "/employees/{employee_id}",
    params(
        ("employee_id" = i64, Path, description = "Employee ID")
    ),
    request_body = EmployeePatch,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "Empty or malformed body"),
        (status = 404, description = "Employee not found"),
        (status = 422, description = "Salary or hire_date out of range"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    store: web::Data<EmployeeStore>,
    path: web::Path<i64>,
    body: web::Json<EmployeePatch>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();
    let patch = body.into_inner();

    if patch.is_empty() {
        return Err(ApiError::InvalidRequest(
            "No fields provided for update".to_string(),
        ));
    }

    let employee = store.update(employee_id, &patch).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/employees/{employee_id}",
    params(
        ("employee_id" = i64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted", body = DeletedResponse),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    store: web::Data<EmployeeStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = store.delete(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(DeletedResponse {
        id,
        message: "Employee information deleted".to_string(),
    }))
}
