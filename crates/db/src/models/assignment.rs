//! Assignment models.
//!
//! An assignment is the immutable record of one asset unit granted to one
//! employee. The asset fields are snapshotted at approval time; later edits
//! to the asset (or its deletion) do not propagate.

use assetflow_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `assignments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Assignment {
    pub id: DbId,
    pub request_id: DbId,
    /// Null once the underlying asset row has been deleted.
    pub asset_id: Option<DbId>,
    pub organization_id: DbId,
    pub employee_email: String,
    pub employee_name: String,
    pub asset_name: String,
    pub asset_image: Option<String>,
    pub asset_type: String,
    pub status: String,
    pub assigned_at: Timestamp,
    pub return_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
