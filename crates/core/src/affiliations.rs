//! Affiliation status literals.
//!
//! Only `active` is ever written by this service; `inactive` exists for
//! external offboarding tooling and is filtered out by every roster and
//! quota query.

pub const AFFILIATION_ACTIVE: &str = "active";
pub const AFFILIATION_INACTIVE: &str = "inactive";
