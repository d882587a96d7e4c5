//! Record store for employee rows.
//!
//! [`EmployeeStore`] is an explicit handle over a SQLite pool. Open it once,
//! hand clones to whoever needs it, and [`close`](EmployeeStore::close) it on
//! shutdown. Every operation validates at the boundary and is atomic on its own.

pub mod validation;

use chrono::{Local, NaiveDateTime};
use futures_util::TryStreamExt;
use sqlx::{Executor, Sqlite, SqlitePool};
use thiserror::Error;
use tracing::{debug, info};

use crate::db::{self, DbSettings};
use crate::model::{Employee, EmployeePatch, NewEmployee, RecentHire, TopEarner};
use crate::utils::db_utils::{build_update_sql, execute_update};

pub use validation::ValidationError;

const SELECT_EMPLOYEE: &str = "SELECT id, name, department, salary, hire_date FROM employee";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("employee {0} not found")]
    NotFound(i64),

    #[error("storage failure: {0}")]
    Storage(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// One `(department, hire_date, salary)` row as read by the model trainer.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct TrainingSample {
    pub department: String,
    pub hire_date: NaiveDateTime,
    pub salary: f64,
}

#[derive(Clone)]
pub struct EmployeeStore {
    pool: SqlitePool,
}

impl EmployeeStore {
    pub async fn open(settings: &DbSettings) -> StoreResult<Self> {
        let pool = db::init_db(settings).await?;
        Ok(Self { pool })
    }

    /// Ephemeral store backed by a private in-memory database.
    pub async fn in_memory() -> StoreResult<Self> {
        let pool = db::init_memory_db().await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("Record store closed");
    }

    pub async fn create(&self, employee: &NewEmployee) -> StoreResult<i64> {
        validation::validate_new(employee, now())?;

        let result = sqlx::query(
            r#"
            INSERT INTO employee (name, department, salary, hire_date)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&employee.name)
        .bind(&employee.department)
        .bind(employee.salary)
        .bind(employee.hire_date)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        info!(employee_id = id, department = %employee.department, "Employee created");
        Ok(id)
    }

    pub async fn get(&self, id: i64) -> StoreResult<Employee> {
        find_by_id(&self.pool, id)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    /// Applies the supplied fields only. The write and the re-read share one
    /// transaction, so any failure leaves the row as it was.
    pub async fn update(&self, id: i64, patch: &EmployeePatch) -> StoreResult<Employee> {
        validation::validate_patch(patch, now())?;

        let Some(update) = build_update_sql("employee", patch, "id", id) else {
            return self.get(id).await;
        };

        let mut tx = self.pool.begin().await?;

        debug!(sql = %update.sql, employee_id = id, "Updating employee");
        let affected = execute_update(&mut *tx, update).await?;
        if affected == 0 {
            return Err(StoreError::NotFound(id));
        }

        let employee = find_by_id(&mut *tx, id)
            .await?
            .ok_or(StoreError::NotFound(id))?;

        tx.commit().await?;

        info!(employee_id = id, "Employee updated");
        Ok(employee)
    }

    pub async fn delete(&self, id: i64) -> StoreResult<i64> {
        let result = sqlx::query("DELETE FROM employee WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        info!(employee_id = id, "Employee deleted");
        Ok(id)
    }

    pub async fn list_all(&self) -> StoreResult<Vec<Employee>> {
        let sql = format!("{SELECT_EMPLOYEE} ORDER BY id");
        let employees = sqlx::query_as::<_, Employee>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(employees)
    }

    /// An empty result is not an error here; callers decide what it means.
    pub async fn list_by_department(&self, department: &str) -> StoreResult<Vec<Employee>> {
        let sql = format!("{SELECT_EMPLOYEE} WHERE department = ? ORDER BY id");
        let employees = sqlx::query_as::<_, Employee>(&sql)
            .bind(department)
            .fetch_all(&self.pool)
            .await?;
        Ok(employees)
    }

    pub async fn distinct_departments(&self) -> StoreResult<Vec<String>> {
        let departments = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT department FROM employee ORDER BY department",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(departments)
    }

    /// Mean salary of an exact (case-sensitive) department match, `None` when
    /// the department has no members.
    pub async fn average_salary(&self, department: &str) -> StoreResult<Option<f64>> {
        let average = sqlx::query_scalar::<_, Option<f64>>(
            "SELECT AVG(salary) FROM employee WHERE department = ?",
        )
        .bind(department)
        .fetch_one(&self.pool)
        .await?;
        Ok(average)
    }

    /// Highest salaries first; equal salaries keep insertion order.
    pub async fn top_k_by_salary(&self, k: u32) -> StoreResult<Vec<TopEarner>> {
        let earners = sqlx::query_as::<_, TopEarner>(
            "SELECT name, salary FROM employee ORDER BY salary DESC, id ASC LIMIT ?",
        )
        .bind(i64::from(k))
        .fetch_all(&self.pool)
        .await?;
        Ok(earners)
    }

    /// Latest hire dates first; equal dates keep insertion order.
    pub async fn most_recent_k_hires(&self, k: u32) -> StoreResult<Vec<RecentHire>> {
        let hires = sqlx::query_as::<_, RecentHire>(
            "SELECT name, hire_date FROM employee ORDER BY hire_date DESC, id ASC LIMIT ?",
        )
        .bind(i64::from(k))
        .fetch_all(&self.pool)
        .await?;
        Ok(hires)
    }

    /// Streams every row inside a single read transaction so the trainer
    /// sees one consistent snapshot.
    pub async fn training_samples(&self, batch_size: usize) -> StoreResult<Vec<TrainingSample>> {
        let batch_size = batch_size.max(1);
        let mut tx = self.pool.begin().await?;
        let mut samples = Vec::new();

        {
            let mut stream = sqlx::query_as::<_, TrainingSample>(
                "SELECT department, hire_date, salary FROM employee ORDER BY id",
            )
            .fetch(&mut *tx);

            while let Some(sample) = stream.try_next().await? {
                samples.push(sample);
                if samples.len() % batch_size == 0 {
                    debug!(rows = samples.len(), "Reading training samples");
                }
            }
        }

        tx.commit().await?;

        info!(rows = samples.len(), "Training snapshot loaded");
        Ok(samples)
    }
}

async fn find_by_id<'e, E>(executor: E, id: i64) -> Result<Option<Employee>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let sql = format!("{SELECT_EMPLOYEE} WHERE id = ?");
    sqlx::query_as::<_, Employee>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
