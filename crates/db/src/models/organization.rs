//! Organization (tenant) models and DTOs.

use assetflow_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `organizations` table.
///
/// `current_employees` is a denormalized counter maintained by the approval
/// flow; quota enforcement never reads it (active affiliations are counted
/// live instead).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Organization {
    pub id: DbId,
    pub hr_email: String,
    pub company_name: String,
    pub company_logo: Option<String>,
    pub employee_limit: i32,
    pub current_employees: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a new organization.
///
/// The HR email comes from the verified principal, never the body. When
/// `package_id` is present the package's seat count becomes the
/// `employee_limit`; otherwise the default applies.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOrganization {
    #[validate(length(min = 1, max = 200))]
    pub company_name: String,
    #[validate(url)]
    pub company_logo: Option<String>,
    pub package_id: Option<DbId>,
}
