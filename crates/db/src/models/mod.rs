//! Domain model structs and DTOs.
//!
//! Entity structs derive `FromRow` generically so the same type decodes rows
//! from either engine.

pub mod account;
pub mod inquiry;
