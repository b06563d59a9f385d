//! Employee-seat quota accounting.
//!
//! `used` is always a live count of active affiliations; the denormalized
//! `current_employees` counter on the organization row is display-only and
//! never feeds enforcement.

use serde::Serialize;

/// Seat limit applied when an organization has no usable configured limit.
pub const DEFAULT_EMPLOYEE_LIMIT: i32 = 5;

/// Snapshot of an organization's seat usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuotaUsage {
    /// Active affiliations counted at call time.
    pub used: i64,
    /// Configured seat limit.
    pub max: i64,
    /// Seats still available, clamped at zero.
    pub remaining: i64,
}

impl QuotaUsage {
    pub fn new(used: i64, max: i64) -> Self {
        Self {
            used,
            max,
            remaining: (max - used).max(0),
        }
    }

    /// Whether a new affiliation would exceed the limit.
    pub fn is_full(&self) -> bool {
        self.used >= self.max
    }
}

/// Resolve a stored seat limit to an enforceable one.
///
/// Non-positive or absent limits fall back to [`DEFAULT_EMPLOYEE_LIMIT`].
pub fn effective_limit(limit: Option<i32>) -> i32 {
    match limit {
        Some(l) if l > 0 => l,
        _ => DEFAULT_EMPLOYEE_LIMIT,
    }
}
