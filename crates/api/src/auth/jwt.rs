//! Bearer token issuing and verification.
//!
//! Tokens are HS256-signed JWTs carrying a [`Claims`] payload and expire two
//! hours after issuance. The service is stateless apart from the signing key.

use std::fmt;

use intake_core::types::DbId;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Token lifetime in seconds.
pub const TOKEN_TTL_SECS: i64 = 2 * 60 * 60;

/// The identity a token vouches for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: DbId,
    pub username: String,
    pub role: String,
}

/// JWT claims embedded in every token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// The account's database id.
    pub id: DbId,
    pub username: String,
    pub role: String,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("JWT secret is missing or empty")]
    MissingSecret,

    /// Bad signature, malformed token, or unexpected algorithm.
    #[error("token is invalid")]
    Invalid,

    #[error("token has expired")]
    Expired,

    #[error("token signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

/// Issues and verifies bearer tokens with a process-wide secret.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService").finish_non_exhaustive()
    }
}

impl TokenService {
    /// Build the service, refusing an empty secret.
    pub fn new(secret: &str) -> Result<Self, TokenError> {
        if secret.trim().is_empty() {
            return Err(TokenError::MissingSecret);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against the caller's clock in `verify_at`.
        validation.validate_exp = false;
        validation.leeway = 0;

        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    /// Issue a token for `identity`, valid for [`TOKEN_TTL_SECS`] from now.
    pub fn issue(&self, identity: &Identity) -> Result<String, TokenError> {
        self.issue_at(identity, chrono::Utc::now().timestamp())
    }

    /// Issue a token as if the current time were `now` (Unix seconds).
    pub fn issue_at(&self, identity: &Identity, now: i64) -> Result<String, TokenError> {
        let claims = Claims {
            id: identity.id,
            username: identity.username.clone(),
            role: identity.role.clone(),
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        };
        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Verify signature and expiry against the wall clock.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, chrono::Utc::now().timestamp())
    }

    /// Verify signature and expiry as if the current time were `now`.
    ///
    /// A token is expired from the second its `exp` is reached.
    pub fn verify_at(&self, token: &str, now: i64) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|_| TokenError::Invalid)?;
        if now >= data.claims.exp {
            return Err(TokenError::Expired);
        }
        Ok(data.claims)
    }
}
