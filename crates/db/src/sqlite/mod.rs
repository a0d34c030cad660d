//! Embedded SQLite engine.
//!
//! Same contract as [`crate::postgres`]. Timestamps are stored as RFC 3339
//! text, which sorts chronologically for a fixed UTC offset.

mod account_repo;
mod inquiry_repo;

pub use account_repo::AccountRepo;
pub use inquiry_repo::InquiryRepo;
