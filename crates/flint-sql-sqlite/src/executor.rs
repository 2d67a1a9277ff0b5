//! Statement execution over a SQLite connection pool.

use flint_sql::{Statement, Value};
use sqlx::sqlite::{SqliteQueryResult, SqliteRow};
use sqlx::SqlitePool;

type SqliteQuery<'q> = sqlx::query::Query<'q, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'q>>;

/// Executes built statements against a [`SqlitePool`].
///
/// Errors from the driver are returned as-is; nothing is retried, wrapped,
/// or reinterpreted.
#[derive(Debug, Clone)]
pub struct SqliteExecutor {
    pool: SqlitePool,
}

impl SqliteExecutor {
    /// Creates an executor over the given pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns the underlying pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Executes a statement that returns no rows.
    pub async fn execute(&self, stmt: &Statement) -> Result<SqliteQueryResult, sqlx::Error> {
        tracing::debug!(sql = %stmt.sql, args = stmt.args.len(), "executing statement");
        bind_args(sqlx::query(&stmt.sql), &stmt.args)
            .execute(&self.pool)
            .await
    }

    /// Runs a query and returns every matching row.
    pub async fn fetch_all(&self, stmt: &Statement) -> Result<Vec<SqliteRow>, sqlx::Error> {
        tracing::debug!(sql = %stmt.sql, args = stmt.args.len(), "fetching rows");
        bind_args(sqlx::query(&stmt.sql), &stmt.args)
            .fetch_all(&self.pool)
            .await
    }

    /// Runs a query expected to match exactly one row.
    pub async fn fetch_one(&self, stmt: &Statement) -> Result<SqliteRow, sqlx::Error> {
        tracing::debug!(sql = %stmt.sql, args = stmt.args.len(), "fetching row");
        bind_args(sqlx::query(&stmt.sql), &stmt.args)
            .fetch_one(&self.pool)
            .await
    }

    /// Runs a query and returns the first matching row, if any.
    pub async fn fetch_optional(&self, stmt: &Statement) -> Result<Option<SqliteRow>, sqlx::Error> {
        tracing::debug!(sql = %stmt.sql, args = stmt.args.len(), "fetching optional row");
        bind_args(sqlx::query(&stmt.sql), &stmt.args)
            .fetch_optional(&self.pool)
            .await
    }
}

/// Binds every value to the query, positionally.
fn bind_args<'q>(mut query: SqliteQuery<'q>, args: &[Value]) -> SqliteQuery<'q> {
    for arg in args {
        query = match arg {
            Value::Null => query.bind(Option::<i64>::None),
            Value::Bool(b) => query.bind(*b),
            Value::Int(i) => query.bind(*i),
            Value::Float(f) => query.bind(*f),
            Value::Text(s) => query.bind(s.clone()),
            Value::Blob(b) => query.bind(b.clone()),
        };
    }
    query
}
