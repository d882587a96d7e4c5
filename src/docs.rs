use crate::api::department::AverageSalaryResponse;
use crate::api::employee::{CreatedResponse, DeletedResponse};
use crate::config::Config;
use crate::model::{Employee, EmployeePatch, NewEmployee, RecentHire, TopEarner};
use utoipa::OpenApi;
use utoipa::openapi::server::Server;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Records API",
        version = "1.0.0",
        description = r#"
## Employee Records

CRUD over employee records plus a few read-only views on top of them.

### Features
- **Employees**: create, read, partially update and delete records
- **Departments**: distinct department names, members of a department, average salary
- **Rankings**: top 10 earners and the 10 most recent hires

### Rules
- `salary` must be greater than 0 and less than 1,000,000
- `hire_date` must fall between `2020-01-01 00:00:00` and now
- Dates are exchanged as `YYYY-MM-DD HH:MM:SS`

### Errors
Every error body is `{"code": ..., "error": ...}` where `code` is one of
`invalid_request` (400), `validation_failed` (422), `not_found` (404) or
`internal_error` (500).

---
Built with **Rust**, **Actix Web**, **SQLx** and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::create_employee,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,

        crate::api::department::list_departments,
        crate::api::department::list_department_employees,
        crate::api::department::average_salary,

        crate::api::ranking::top_earners,
        crate::api::ranking::most_recent_hires
    ),
    components(
        schemas(
            Employee,
            NewEmployee,
            EmployeePatch,
            CreatedResponse,
            DeletedResponse,
            AverageSalaryResponse,
            TopEarner,
            RecentHire
        )
    ),
    tags(
        (name = "Employee", description = "Employee record management APIs"),
        (name = "Department", description = "Department views over employee records"),
        (name = "Ranking", description = "Top earners and most recent hires"),
    )
)]
pub struct ApiDoc;

/// The document with its server base set to the mounted `API_PREFIX`; the
/// paths above are relative to it.
pub fn openapi_for(config: &Config) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![Server::new(config.api_prefix.clone())]);
    doc
}
