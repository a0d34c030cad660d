//! Startup provisioning of the admin account.

use intake_core::roles::ROLE_ADMIN;
use intake_db::models::account::CreateAccount;
use intake_db::CredentialStore;

use crate::auth::password::hash_password;
use crate::config::SeedAdmin;
use crate::error::{AppError, AppResult};

/// Create the configured admin account unless the username already exists.
///
/// Returns `true` if an account was created. An existing account, including
/// its password, is left as it is.
pub async fn seed_admin(accounts: &dyn CredentialStore, seed: &SeedAdmin) -> AppResult<bool> {
    if accounts.find_by_username(&seed.username).await?.is_some() {
        tracing::debug!(username = %seed.username, "Admin account already present");
        return Ok(false);
    }

    let password_hash = hash_password(seed.password.expose())
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let created = accounts
        .create_if_absent(&CreateAccount {
            username: seed.username.clone(),
            password_hash,
            role: Some(ROLE_ADMIN.to_string()),
        })
        .await?;

    if created {
        tracing::info!(username = %seed.username, "Seeded admin account");
    }
    Ok(created)
}
