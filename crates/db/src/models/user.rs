//! Employee profile models and DTOs.

use assetflow_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `users` table.
///
/// Profiles are optional: roster queries outer-join on email and tolerate
/// employees with no profile row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub full_name: String,
    pub photo_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing the caller's own profile.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertProfile {
    #[validate(length(min = 1, max = 200))]
    pub full_name: String,
    #[validate(url)]
    pub photo_url: Option<String>,
}
