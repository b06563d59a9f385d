//! Assignment status literals.
//!
//! `returned` is reserved for a future reclaim flow; nothing in this service
//! writes it.

pub const ASSIGNMENT_ASSIGNED: &str = "assigned";
pub const ASSIGNMENT_RETURNED: &str = "returned";
