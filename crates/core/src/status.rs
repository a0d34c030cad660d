//! Inquiry status values.
//!
//! Status is free-form text; only the initial value is fixed.

/// Status assigned to every inquiry at submission time.
pub const STATUS_NEW: &str = "New";
