use anyhow::{Context, Result};
use diesel::PgConnection;
use diesel::connection::SimpleConnection;

/// Idempotent DDL run once at startup. There is no migration history.
pub const SCHEMA_SQL: &str = r"
CREATE TABLE IF NOT EXISTS users (
    id SERIAL PRIMARY KEY,
    username VARCHAR NOT NULL,
    email VARCHAR NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
-- The unique indexes are the only uniqueness guarantee
CREATE UNIQUE INDEX IF NOT EXISTS ix_users_username ON users (username);
CREATE UNIQUE INDEX IF NOT EXISTS ix_users_email ON users (email);

CREATE TABLE IF NOT EXISTS generation_history (
    id SERIAL PRIMARY KEY,
    user_id INTEGER,
    image_url VARCHAR,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

/// Creates `users` and `generation_history` if they are missing
pub fn ensure_schema(conn: &mut PgConnection) -> Result<()> {
    conn.batch_execute(SCHEMA_SQL)
        .context("Failed to create database schema")?;
    tracing::info!("Database schema ready");
    Ok(())
}
