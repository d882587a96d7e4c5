use chrono::NaiveDateTime;
use sqlx::SqliteConnection;

use crate::model::EmployeePatch;

/// ===============================
/// SQL bindable value enum
/// ===============================
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    String(String),
    I64(i64),
    F64(f64),
    DateTime(NaiveDateTime),
}

/// ===============================
/// SQL update container
/// ===============================
#[derive(Debug, Clone, PartialEq)]
pub struct SqlUpdate {
    pub sql: String,
    pub values: Vec<SqlValue>,
}

/// ===============================
/// Build dynamic UPDATE SQL
/// ===============================
///
/// Column names come from the patch type, never from the request body.
/// Returns `None` when the patch carries no fields.
pub fn build_update_sql(
    table: &str,
    patch: &EmployeePatch,
    id_column: &str,
    id_value: i64,
) -> Option<SqlUpdate> {
    let mut columns: Vec<&str> = Vec::with_capacity(4);
    let mut values = Vec::with_capacity(5);

    if let Some(name) = &patch.name {
        columns.push("name");
        values.push(SqlValue::String(name.clone()));
    }
    if let Some(department) = &patch.department {
        columns.push("department");
        values.push(SqlValue::String(department.clone()));
    }
    if let Some(salary) = patch.salary {
        columns.push("salary");
        values.push(SqlValue::F64(salary));
    }
    if let Some(hire_date) = patch.hire_date {
        columns.push("hire_date");
        values.push(SqlValue::DateTime(hire_date));
    }

    if columns.is_empty() {
        return None;
    }

    let set_clause = columns
        .iter()
        .map(|c| format!("{} = ?", c))
        .collect::<Vec<_>>()
        .join(", ");

    let sql = format!("UPDATE {} SET {} WHERE {} = ?", table, set_clause, id_column);

    // WHERE id = ?
    values.push(SqlValue::I64(id_value));

    Some(SqlUpdate { sql, values })
}

/// ===============================
/// Execute the update
/// ===============================
pub async fn execute_update(
    conn: &mut SqliteConnection,
    update: SqlUpdate,
) -> Result<u64, sqlx::Error> {
    let mut query = sqlx::query(&update.sql);

    for value in update.values {
        query = match value {
            SqlValue::String(v) => query.bind(v),
            SqlValue::I64(v) => query.bind(v),
            SqlValue::F64(v) => query.bind(v),
            SqlValue::DateTime(v) => query.bind(v),
        };
    }

    let result = query.execute(conn).await?;
    Ok(result.rows_affected())
}
