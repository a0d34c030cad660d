use std::sync::Arc;

use intake_db::{CredentialStore, Database, InquiryStore};

use crate::auth::jwt::{TokenError, TokenService};
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc` or is a pool handle.
/// Nothing here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the configured engine (used by the health check).
    pub database: Database,
    pub inquiries: Arc<dyn InquiryStore>,
    pub accounts: Arc<dyn CredentialStore>,
    pub tokens: Arc<TokenService>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Wire the stores and token service for `database`.
    ///
    /// Fails if the configured JWT secret is unusable, so the server never
    /// starts without a signing key.
    pub fn new(database: Database, config: ServerConfig) -> Result<Self, TokenError> {
        let tokens = TokenService::new(config.jwt_secret.expose())?;
        Ok(Self {
            inquiries: database.inquiry_store(),
            accounts: database.credential_store(),
            database,
            tokens: Arc::new(tokens),
            config: Arc::new(config),
        })
    }
}
