//! Database connection management

use std::time::Duration;

use sqlx::{
    PgPool, Postgres, Row, Transaction,
    migrate::{MigrateError, Migrator},
    postgres::{PgPoolOptions, PgRow},
    query,
};

/// Migrations embedded from the workspace `migrations/` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Default pool size, matching the number of concurrent checkouts we expect per node.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 25;

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Begin a read-committed transaction.
    ///
    /// # Errors
    ///
    /// Returns an error when starting the transaction fails.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }

    /// Begin a transaction whose row-lock waits are bounded by `lock_timeout`.
    ///
    /// The timeout is `SET LOCAL`, so it dies with the transaction and never leaks
    /// back into the pool.
    ///
    /// # Errors
    ///
    /// Returns an error when starting the transaction or applying the timeout fails.
    pub async fn begin_with_lock_timeout(
        &self,
        lock_timeout: Duration,
    ) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        // SET does not accept bind parameters; the value is an integer we format ourselves.
        query(&format!(
            "SET LOCAL lock_timeout = '{}ms'",
            lock_timeout.as_millis()
        ))
        .execute(&mut *tx)
        .await?;

        Ok(tx)
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Apply any pending migrations.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}

pub(crate) fn try_get_amount(row: &PgRow, column: &str) -> sqlx::Result<u64> {
    let value: i64 = row.try_get(column)?;

    u64::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

pub(crate) fn try_get_count(row: &PgRow, column: &str) -> sqlx::Result<u32> {
    let value: i32 = row.try_get(column)?;

    u32::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

pub(crate) fn encode_amount(value: u64) -> sqlx::Result<i64> {
    i64::try_from(value).map_err(|e| sqlx::Error::Encode(Box::new(e)))
}

pub(crate) fn encode_count(value: u32) -> sqlx::Result<i32> {
    i32::try_from(value).map_err(|e| sqlx::Error::Encode(Box::new(e)))
}
