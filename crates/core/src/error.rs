#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The request carried no bearer token.
    #[error("No token provided")]
    Unauthenticated,

    /// The bearer token was malformed, tampered with, or expired.
    #[error("Token invalid/expired")]
    InvalidToken,

    /// Login failed. Deliberately does not say whether the username or the
    /// password was wrong.
    #[error("Invalid credentials")]
    InvalidCredentials,
}
