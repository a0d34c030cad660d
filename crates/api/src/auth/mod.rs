//! Authentication primitives.
//!
//! - [`password`] -- Argon2id hashing plus legacy bcrypt verification.
//! - [`jwt`] -- the token service that issues and verifies bearer tokens.

pub mod jwt;
pub mod password;
