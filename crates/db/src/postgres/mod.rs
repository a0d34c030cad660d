//! PostgreSQL engine.
//!
//! Each repository owns a clone of the pool and implements one store trait.

mod account_repo;
mod inquiry_repo;

pub use account_repo::AccountRepo;
pub use inquiry_repo::InquiryRepo;
