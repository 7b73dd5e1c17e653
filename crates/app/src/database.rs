//! Database connection management

use std::error::Error as StdError;

use sqlx::{
    PgPool, Postgres, Transaction,
    migrate::{MigrateError, Migrator},
    postgres::PgPoolOptions,
};

/// Migrations embedded from the workspace `migrations/` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Begin a transaction that scopes one lifecycle operation.
    ///
    /// # Errors
    ///
    /// Returns an error when starting the transaction fails.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
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

/// Convert between a domain integer and the signed column type Postgres
/// stores it as, in either direction.
pub(crate) fn convert_column<T, U>(column: &str, value: T) -> Result<U, sqlx::Error>
where
    U: TryFrom<T>,
    U::Error: StdError + Send + Sync + 'static,
{
    U::try_from(value).map_err(|e| column_error(column, e))
}

/// Parse a text column holding an enum label.
pub(crate) fn parse_column<T>(column: &str, value: &str) -> Result<T, sqlx::Error>
where
    T: std::str::FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    value.parse::<T>().map_err(|e| column_error(column, e))
}

fn column_error(column: &str, source: impl StdError + Send + Sync + 'static) -> sqlx::Error {
    sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(source),
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::cars::records::CarStatus;

    use super::*;

    #[test]
    fn convert_column_rejects_mileage_outside_signed_range() {
        let result: Result<i64, _> = convert_column("mileage_km", u64::MAX);

        assert!(
            matches!(result, Err(sqlx::Error::ColumnDecode { ref index, .. }) if index == "mileage_km"),
            "expected ColumnDecode for mileage_km, got {result:?}"
        );
    }

    #[test]
    fn convert_column_rejects_negative_stored_mileage() {
        let result: Result<u64, _> = convert_column("mileage_km", -1_i64);

        assert!(result.is_err());
    }

    #[test]
    fn parse_column_reports_the_column_name() {
        let result: Result<CarStatus, _> = parse_column("status", "stolen");

        assert!(
            matches!(result, Err(sqlx::Error::ColumnDecode { ref index, .. }) if index == "status"),
            "expected ColumnDecode for status, got {result:?}"
        );
    }
}
