//! Admin account model and DTOs.

use intake_core::types::DbId;
use sqlx::FromRow;

/// A row from the `accounts` table.
///
/// Holds the password hash, so it is intentionally not `Serialize`.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

/// DTO for provisioning an account out-of-band (seeding).
#[derive(Debug, Clone)]
pub struct CreateAccount {
    pub username: String,
    pub password_hash: String,
    /// Defaults to `admin` if omitted.
    pub role: Option<String>,
}
