use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

use crate::config::Config;

/// Pool settings pulled out of [`Config`].
#[derive(Clone, Debug)]
pub struct DbSettings {
    pub database_url: String,
    pub max_connections: u32,
    pub busy_timeout: Duration,
    pub acquire_timeout: Duration,
}

impl From<&Config> for DbSettings {
    fn from(config: &Config) -> Self {
        Self {
            database_url: config.database_url.clone(),
            max_connections: config.db_max_connections,
            busy_timeout: Duration::from_millis(config.db_busy_timeout_ms),
            acquire_timeout: Duration::from_secs(config.db_acquire_timeout_secs),
        }
    }
}

pub async fn init_db(settings: &DbSettings) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&settings.database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(settings.busy_timeout);

    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect_with(options)
        .await?;

    ensure_schema(&pool).await?;

    tracing::info!(
        url = %settings.database_url,
        max_connections = settings.max_connections,
        busy_timeout = ?settings.busy_timeout,
        "Database connection established"
    );

    Ok(pool)
}

/// A private in-memory database. Pinned to one connection that never
/// expires, otherwise every new connection would see an empty database.
pub async fn init_memory_db() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    ensure_schema(&pool).await?;
    Ok(pool)
}

/// Creates the employee table and its lookup indexes if they are missing.
///
/// Only salary is bounded at this level; hire_date bounds depend on the
/// current time and are checked by the store before every write.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employee (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT    NOT NULL,
            department  TEXT    NOT NULL,
            salary      REAL    NOT NULL CHECK (salary > 0 AND salary < 1000000),
            hire_date   TEXT    NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    for ddl in [
        "CREATE INDEX IF NOT EXISTS idx_employee_department ON employee (department)",
        "CREATE INDEX IF NOT EXISTS idx_employee_salary ON employee (salary)",
        "CREATE INDEX IF NOT EXISTS idx_employee_hire_date ON employee (hire_date)",
    ] {
        sqlx::query(ddl).execute(pool).await?;
    }

    Ok(())
}
