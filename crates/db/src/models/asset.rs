//! Asset inventory models and DTOs.

use assetflow_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `assets` table. `quantity` is the authoritative stock
/// count, decremented (never below zero) by the approval flow.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Asset {
    pub id: DbId,
    pub organization_id: DbId,
    pub name: String,
    pub image_url: Option<String>,
    pub asset_type: String,
    pub quantity: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a new asset.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAsset {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(url)]
    pub image_url: Option<String>,
    /// Defaults to `returnable` when absent.
    pub asset_type: Option<String>,
    #[validate(range(min = 0))]
    pub quantity: i32,
}

/// DTO for updating an existing asset.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateAsset {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(url)]
    pub image_url: Option<String>,
    pub asset_type: Option<String>,
    #[validate(range(min = 0))]
    pub quantity: Option<i32>,
}
