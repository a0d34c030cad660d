//! Request-level authentication.
//!
//! - [`auth::AuthUser`] -- extracts the authenticated admin from a Bearer token.

pub mod auth;
