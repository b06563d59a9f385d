//! Subscription package reference data.

use assetflow_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `packages` lookup table (seeded by migration).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Package {
    pub id: DbId,
    pub name: String,
    pub employee_limit: i32,
    pub price_cents: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
