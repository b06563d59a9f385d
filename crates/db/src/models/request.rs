//! Asset request models and DTOs.

use assetflow_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `requests` table.
///
/// `status` holds a canonical [`assetflow_core::requests::RequestStatus`]
/// literal; the CHECK constraint and the repository layer keep it that way.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Request {
    pub id: DbId,
    pub organization_id: DbId,
    pub requester_email: String,
    pub requester_name: String,
    pub asset_id: Option<DbId>,
    pub note: Option<String>,
    pub status: String,
    pub requested_at: Timestamp,
    pub approved_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for filing a new request. The requester email comes from the verified
/// principal; a target asset may be named now or chosen at approval time.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRequest {
    pub organization_id: DbId,
    pub asset_id: Option<DbId>,
    #[validate(length(min = 1, max = 200))]
    pub requester_name: String,
    #[validate(length(max = 2000))]
    pub note: Option<String>,
}

/// DTO for the generic request patch.
///
/// `status` is deserialized only so the handler can reject any attempt to
/// change it; lifecycle transitions happen exclusively through the approval
/// flow.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateRequest {
    #[validate(length(min = 1, max = 200))]
    pub requester_name: Option<String>,
    #[validate(length(max = 2000))]
    pub note: Option<String>,
    pub asset_id: Option<DbId>,
    pub status: Option<String>,
}

/// Body of the approval call: which asset grants the request.
#[derive(Debug, Clone, Deserialize)]
pub struct ApproveRequest {
    pub asset_id: DbId,
}
