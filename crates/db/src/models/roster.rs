//! Read models produced by the roster aggregation queries.

use assetflow_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// One active employee in an organization's roster.
///
/// Profile fields are null for employees without a `users` row; `joined_at`
/// is the date of the first assignment seen for that employee in this
/// organization (null before any assignment).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RosterEntry {
    pub employee_email: String,
    pub full_name: Option<String>,
    pub photo_url: Option<String>,
    pub joined_at: Option<Timestamp>,
    pub asset_count: i64,
}

/// Flat row backing the team view query, one per (organization, teammate).
#[derive(Debug, Clone, FromRow)]
pub struct TeamRow {
    pub organization_id: DbId,
    pub company_name: String,
    pub company_logo: Option<String>,
    pub employee_email: String,
    pub full_name: Option<String>,
    pub photo_url: Option<String>,
}

/// A teammate within one organization of the team view.
#[derive(Debug, Clone, Serialize)]
pub struct TeamMember {
    pub employee_email: String,
    pub full_name: Option<String>,
    pub photo_url: Option<String>,
}

/// One organization the caller belongs to, with its other active members.
#[derive(Debug, Clone, Serialize)]
pub struct TeamGroup {
    pub organization_id: DbId,
    pub company_name: String,
    pub company_logo: Option<String>,
    pub members: Vec<TeamMember>,
}
