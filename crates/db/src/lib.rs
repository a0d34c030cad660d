//! Persistence for inquiries and admin accounts.
//!
//! Two interchangeable engines sit behind the [`store`] traits:
//!
//! - [`postgres`] -- networked PostgreSQL, for hosted deployments.
//! - [`sqlite`] -- embedded file-backed SQLite, for single-box installs and tests.
//!
//! [`Database`] picks the engine from the connection URL.

use std::str::FromStr;
use std::sync::Arc;

use chrono::SubsecRound;
use intake_core::types::Timestamp;
use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{PgPool, SqlitePool};

pub mod error;
pub mod models;
pub mod postgres;
pub mod sqlite;
pub mod store;

pub use error::StorageError;
pub use store::{CredentialStore, InquiryStore};

/// Default pool size when none is configured.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Supported storage engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    Postgres,
    Sqlite,
}

impl Engine {
    /// Determine the engine from a connection URL's scheme.
    pub fn from_url(database_url: &str) -> Result<Self, StorageError> {
        let scheme = database_url
            .split_once(':')
            .map(|(scheme, _)| scheme)
            .unwrap_or_default();
        match scheme {
            "postgres" | "postgresql" => Ok(Engine::Postgres),
            "sqlite" => Ok(Engine::Sqlite),
            other => Err(StorageError::UnsupportedUrl(other.to_string())),
        }
    }
}

/// A connection pool for whichever engine is configured.
///
/// Cheaply cloneable; both variants wrap an `Arc`-backed pool.
#[derive(Debug, Clone)]
pub enum Database {
    Postgres(PgPool),
    Sqlite(SqlitePool),
}

impl Database {
    /// Open a pool for the engine named by `database_url`.
    ///
    /// SQLite files are created if missing. An in-memory SQLite URL is pinned
    /// to a single long-lived connection, since every connection would
    /// otherwise see its own empty database.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StorageError> {
        match Engine::from_url(database_url)? {
            Engine::Postgres => {
                let pool = PgPoolOptions::new()
                    .max_connections(max_connections)
                    .connect(database_url)
                    .await?;
                Ok(Database::Postgres(pool))
            }
            Engine::Sqlite => {
                let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
                let pool_options = if database_url.contains(":memory:") {
                    SqlitePoolOptions::new()
                        .max_connections(1)
                        .idle_timeout(None)
                        .max_lifetime(None)
                } else {
                    SqlitePoolOptions::new().max_connections(max_connections)
                };
                let pool = pool_options.connect_with(options).await?;
                Ok(Database::Sqlite(pool))
            }
        }
    }

    pub fn engine(&self) -> Engine {
        match self {
            Database::Postgres(_) => Engine::Postgres,
            Database::Sqlite(_) => Engine::Sqlite,
        }
    }

    /// Apply the engine's embedded migrations.
    pub async fn run_migrations(&self) -> Result<(), StorageError> {
        match self {
            Database::Postgres(pool) => sqlx::migrate!("./migrations/postgres").run(pool).await?,
            Database::Sqlite(pool) => sqlx::migrate!("./migrations/sqlite").run(pool).await?,
        }
        Ok(())
    }

    /// Round-trip a trivial query to confirm the database is reachable.
    pub async fn health_check(&self) -> Result<(), StorageError> {
        match self {
            Database::Postgres(pool) => {
                sqlx::query("SELECT 1").execute(pool).await?;
            }
            Database::Sqlite(pool) => {
                sqlx::query("SELECT 1").execute(pool).await?;
            }
        }
        Ok(())
    }

    pub fn inquiry_store(&self) -> Arc<dyn InquiryStore> {
        match self {
            Database::Postgres(pool) => Arc::new(postgres::InquiryRepo::new(pool.clone())),
            Database::Sqlite(pool) => Arc::new(sqlite::InquiryRepo::new(pool.clone())),
        }
    }

    pub fn credential_store(&self) -> Arc<dyn CredentialStore> {
        match self {
            Database::Postgres(pool) => Arc::new(postgres::AccountRepo::new(pool.clone())),
            Database::Sqlite(pool) => Arc::new(sqlite::AccountRepo::new(pool.clone())),
        }
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        match self {
            Database::Postgres(pool) => pool.close().await,
            Database::Sqlite(pool) => pool.close().await,
        }
    }
}

/// Current time truncated to microseconds, the precision PostgreSQL keeps.
///
/// Both engines stamp rows with this so a value read back equals the value
/// written.
pub(crate) fn now() -> Timestamp {
    chrono::Utc::now().trunc_subsecs(6)
}
