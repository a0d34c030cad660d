//! Engine-independent store contracts.
//!
//! Both the PostgreSQL and SQLite implementations honor the same semantics;
//! callers hold them as `Arc<dyn InquiryStore>` / `Arc<dyn CredentialStore>`.

use async_trait::async_trait;
use intake_core::types::DbId;

use crate::error::StorageError;
use crate::models::account::{Account, CreateAccount};
use crate::models::inquiry::{CreateInquiry, Inquiry, UpdateInquiry};

/// Persistence for inquiry records.
///
/// Every operation touches at most one row. Mutations on an id that does not
/// exist report an affected count of 0 rather than an error.
#[async_trait]
pub trait InquiryStore: Send + Sync {
    /// Insert a new inquiry with status `New` and the current time as its
    /// submission date. Returns the generated id.
    async fn create(&self, input: &CreateInquiry) -> Result<DbId, StorageError>;

    /// All inquiries, newest submission first.
    async fn list(&self) -> Result<Vec<Inquiry>, StorageError>;

    /// Overwrite every client-editable field. Leaves `id`, `submission_date`
    /// and `status` untouched.
    async fn update(&self, id: DbId, input: &UpdateInquiry) -> Result<u64, StorageError>;

    /// Overwrite only the status.
    async fn patch_status(&self, id: DbId, status: &str) -> Result<u64, StorageError>;

    /// Permanently remove the inquiry.
    async fn delete(&self, id: DbId) -> Result<u64, StorageError>;
}

/// Lookup of admin accounts.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Exact, case-sensitive username lookup.
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, StorageError>;

    /// Insert the account unless the username is already taken.
    ///
    /// Returns `true` if a row was inserted. Existing accounts are never
    /// modified.
    async fn create_if_absent(&self, input: &CreateAccount) -> Result<bool, StorageError>;
}
