use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::datetime;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "name": "Alice",
        "department": "Engineering",
        "salary": 90000.0,
        "hire_date": "2021-03-01 00:00:00"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "Alice")]
    pub name: String,

    #[schema(example = "Engineering")]
    pub department: String,

    #[schema(example = 90000.0)]
    pub salary: f64,

    #[serde(with = "datetime")]
    #[schema(
        example = "2021-03-01 00:00:00",
        value_type = String,
        format = "date-time"
    )]
    pub hire_date: NaiveDateTime,
}

/// Fields required to create an employee. The id is assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct NewEmployee {
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = "Engineering")]
    pub department: String,
    #[schema(example = 90000.0)]
    pub salary: f64,
    #[serde(with = "datetime")]
    #[schema(example = "2021-03-01 00:00:00", value_type = String, format = "date-time")]
    pub hire_date: NaiveDateTime,
}

/// Partial update. Absent (or `null`) fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct EmployeePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(default, with = "datetime::option", skip_serializing_if = "Option::is_none")]
    #[schema(example = "2021-03-01 00:00:00", value_type = Option<String>, format = "date-time")]
    pub hire_date: Option<NaiveDateTime>,
}

impl EmployeePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.department.is_none()
            && self.salary.is_none()
            && self.hire_date.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct TopEarner {
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = 90000.0)]
    pub salary: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct RecentHire {
    #[schema(example = "Alice")]
    pub name: String,
    #[serde(with = "datetime")]
    #[schema(example = "2021-03-01 00:00:00", value_type = String, format = "date-time")]
    pub hire_date: NaiveDateTime,
}
