//! Repository for the `accounts` table on SQLite.

use async_trait::async_trait;
use intake_core::roles::ROLE_ADMIN;
use sqlx::SqlitePool;

use crate::error::StorageError;
use crate::models::account::{Account, CreateAccount};
use crate::store::CredentialStore;

const COLUMNS: &str = "id, username, password_hash, role";

#[derive(Debug, Clone)]
pub struct AccountRepo {
    pool: SqlitePool,
}

impl AccountRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for AccountRepo {
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, StorageError> {
        let query = format!("SELECT {COLUMNS} FROM accounts WHERE username = ?1");
        let account = sqlx::query_as::<_, Account>(&query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(account)
    }

    async fn create_if_absent(&self, input: &CreateAccount) -> Result<bool, StorageError> {
        let result = sqlx::query(
            "INSERT INTO accounts (username, password_hash, role)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (username) DO NOTHING",
        )
        .bind(&input.username)
        .bind(&input.password_hash)
        .bind(input.role.as_deref().unwrap_or(ROLE_ADMIN))
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
