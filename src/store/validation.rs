use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::model::{EmployeePatch, NewEmployee};

pub const SALARY_MIN_EXCLUSIVE: f64 = 0.0;
pub const SALARY_MAX_EXCLUSIVE: f64 = 1_000_000.0;
pub const MAX_TEXT_LEN: usize = 50;

/// Earliest accepted hire date, 2020-01-01 00:00:00.
pub fn earliest_hire_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("salary must be greater than 0 and less than 1000000, got {0}")]
    SalaryOutOfRange(f64),

    #[error("hire_date {0} is before 2020-01-01 00:00:00")]
    HireDateTooEarly(NaiveDateTime),

    #[error("hire_date {0} is in the future")]
    HireDateInFuture(NaiveDateTime),

    #[error("{0} must not be blank")]
    Blank(&'static str),

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

pub fn validate_salary(salary: f64) -> Result<(), ValidationError> {
    if salary.is_finite() && salary > SALARY_MIN_EXCLUSIVE && salary < SALARY_MAX_EXCLUSIVE {
        Ok(())
    } else {
        Err(ValidationError::SalaryOutOfRange(salary))
    }
}

pub fn validate_hire_date(
    hire_date: NaiveDateTime,
    now: NaiveDateTime,
) -> Result<(), ValidationError> {
    if hire_date < earliest_hire_date() {
        return Err(ValidationError::HireDateTooEarly(hire_date));
    }
    if hire_date > now {
        return Err(ValidationError::HireDateInFuture(hire_date));
    }
    Ok(())
}

pub fn validate_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Blank(field));
    }
    validate_length(field, value)
}

/// Departments are free text; any string up to the column limit is accepted,
/// the empty string included.
pub fn validate_department(value: &str) -> Result<(), ValidationError> {
    validate_length("department", value)
}

fn validate_length(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_TEXT_LEN,
        });
    }
    Ok(())
}

pub fn validate_new(employee: &NewEmployee, now: NaiveDateTime) -> Result<(), ValidationError> {
    validate_text("name", &employee.name)?;
    validate_department(&employee.department)?;
    validate_salary(employee.salary)?;
    validate_hire_date(employee.hire_date, now)
}

/// Checks only the fields the patch carries.
pub fn validate_patch(patch: &EmployeePatch, now: NaiveDateTime) -> Result<(), ValidationError> {
    if let Some(name) = &patch.name {
        validate_text("name", name)?;
    }
    if let Some(department) = &patch.department {
        validate_department(department)?;
    }
    if let Some(salary) = patch.salary {
        validate_salary(salary)?;
    }
    if let Some(hire_date) = patch.hire_date {
        validate_hire_date(hire_date, now)?;
    }
    Ok(())
}
