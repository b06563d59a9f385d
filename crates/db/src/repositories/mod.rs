//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` (or, for the primitives composed by the approval
//! transaction, any `PgExecutor`) as the first argument.

pub mod affiliation_repo;
pub mod approval_repo;
pub mod asset_repo;
pub mod assignment_repo;
pub mod organization_repo;
pub mod package_repo;
pub mod request_repo;
pub mod roster_repo;
pub mod user_repo;

pub use affiliation_repo::AffiliationRepo;
pub use approval_repo::{ApprovalError, ApprovalRepo};
pub use asset_repo::AssetRepo;
pub use assignment_repo::AssignmentRepo;
pub use organization_repo::OrganizationRepo;
pub use package_repo::PackageRepo;
pub use request_repo::RequestRepo;
pub use roster_repo::RosterRepo;
pub use user_repo::UserRepo;

/// Default page size for listing queries.
pub(crate) const DEFAULT_LIMIT: i64 = 50;

/// Maximum page size for listing queries.
pub(crate) const MAX_LIMIT: i64 = 100;

/// Clamp an optional caller-supplied limit into `1..=MAX_LIMIT`.
pub(crate) fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

/// Clamp an optional caller-supplied offset to be non-negative.
pub(crate) fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
