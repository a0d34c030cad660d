//! Password hashing and verification.
//!
//! New hashes use Argon2id with a random salt, stored as PHC strings.
//! Verification also accepts bcrypt hashes (`$2a$`, `$2b$`, `$2y$`) so accounts
//! provisioned before the switch to Argon2id keep working. Both comparisons
//! are constant-time inside their respective crates.

use std::sync::LazyLock;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("argon2: {0}")]
    Argon2(argon2::password_hash::Error),

    #[error("bcrypt: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

/// Hash a plaintext password using Argon2id with a random salt.
///
/// Returns the PHC-formatted hash string (includes algorithm, params, salt, and hash).
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(PasswordError::Argon2)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored hash.
///
/// Returns `Ok(false)` on mismatch and `Err` only if the stored hash cannot be
/// parsed.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, PasswordError> {
    if is_bcrypt(stored_hash) {
        return Ok(bcrypt::verify(password, stored_hash)?);
    }

    let parsed = PasswordHash::new(stored_hash).map_err(PasswordError::Argon2)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::Argon2(e)),
    }
}

/// Argon2id hash of a fixed throwaway password, computed on first use.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("intake-dummy-password").ok());

/// Run a full Argon2id verification whose outcome is discarded.
///
/// Called when no account matches a login so that an unknown username costs
/// the same as a wrong password. Always returns `false`.
pub fn verify_against_dummy(password: &str) -> bool {
    if let Some(hash) = DUMMY_HASH.as_deref() {
        let _ = verify_password(password, hash);
    }
    false
}

fn is_bcrypt(hash: &str) -> bool {
    ["$2a$", "$2b$", "$2y$"]
        .iter()
        .any(|prefix| hash.starts_with(prefix))
}
