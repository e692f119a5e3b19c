use super::error::RepositoryError;
use super::{DbConnection, DbPool};
use anyhow::{Context, Result};
use diesel::PgConnection;
use diesel::r2d2::ConnectionManager;
use std::time::Duration;

/// Explicit persistence handle, built once in `main` and passed to the router as state.
///
/// Cloning is cheap: clones share the same r2d2 pool.
#[derive(Clone)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    /// Opens the pool and fails fast if the database is unreachable
    pub fn connect(database_url: &str, max_size: u32) -> Result<Self> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);

        let pool = diesel::r2d2::Pool::builder()
            .max_size(max_size)
            .build(manager)
            .context("Failed to create database pool")?;

        Ok(Self { pool })
    }

    /// Builds the pool without opening a connection; errors surface on first checkout.
    pub fn lazy(database_url: &str, max_size: u32, connection_timeout: Duration) -> Self {
        let manager = ConnectionManager::<PgConnection>::new(database_url);

        let pool = diesel::r2d2::Pool::builder()
            .max_size(max_size)
            .min_idle(Some(0))
            .connection_timeout(connection_timeout)
            .build_unchecked(manager);

        Self { pool }
    }

    /// Checks out a scoped session. The connection goes back to the pool on drop.
    pub fn connection(&self) -> Result<DbConnection, RepositoryError> {
        self.pool.get().map_err(Into::into)
    }

    pub fn max_size(&self) -> u32 {
        self.pool.max_size()
    }
}

/// Connects to `DATABASE_URL` and makes sure the schema exists.
/// Only used by tests that need a live PostgreSQL.
#[cfg(test)]
pub fn test_database() -> Database {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let database = Database::connect(&database_url, 5).expect("Failed to connect to test database");
    let mut conn = database.connection().expect("Failed to get a connection");
    super::bootstrap::ensure_schema(&mut conn).expect("Failed to create schema");
    database
}
