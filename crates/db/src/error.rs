/// Any fault raised by the persistence layer.
///
/// The message of the underlying driver error is preserved; callers decide how
/// much of it to expose.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The configured URL names no supported engine. Only the scheme is kept
    /// so credentials in the URL never reach logs.
    #[error("Unsupported database URL scheme: {0}")]
    UnsupportedUrl(String),
}
