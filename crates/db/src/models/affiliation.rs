//! Affiliation models.

use assetflow_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `affiliations` table: the set-of-record for which
/// employees belong to which organization. At most one row exists per
/// (organization, employee) pair.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Affiliation {
    pub id: DbId,
    pub organization_id: DbId,
    pub employee_email: String,
    pub status: String,
    pub affiliated_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
