//! Shared domain types for the inquiry intake service.

pub mod coerce;
pub mod error;
pub mod roles;
pub mod status;
pub mod types;
