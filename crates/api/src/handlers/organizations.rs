//! Handlers for organization registration, quota usage, and the roster view.

use assetflow_core::error::CoreError;
use assetflow_core::quota::{effective_limit, QuotaUsage};
use assetflow_core::types::DbId;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use assetflow_db::models::organization::{CreateOrganization, Organization};
use assetflow_db::repositories::{AffiliationRepo, OrganizationRepo, PackageRepo, RosterRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireAuth, RequireHr};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Load an organization and verify the caller owns it.
///
/// Ownership means the verified principal email equals the organization's HR
/// account email. Returns NotFound for a missing organization and Forbidden
/// for a mismatched caller.
pub(crate) async fn ensure_owned_org(
    pool: &sqlx::PgPool,
    organization_id: DbId,
    user: &AuthUser,
) -> AppResult<Organization> {
    let org = OrganizationRepo::find_by_id(pool, organization_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Organization",
            id: organization_id,
        }))?;

    if org.hr_email != user.email {
        return Err(AppError::Core(CoreError::Forbidden(
            "Organization belongs to a different HR account".into(),
        )));
    }

    Ok(org)
}

// ---------------------------------------------------------------------------
// Organization registration
// ---------------------------------------------------------------------------

/// POST /api/v1/organizations
///
/// Register an organization for the authenticated HR account. The seat limit
/// comes from the selected package, or the default when none is chosen. One
/// organization per HR account (duplicate registration is a 409).
pub async fn create_organization(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Json(input): Json<CreateOrganization>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let employee_limit = match input.package_id {
        Some(package_id) => {
            let package = PackageRepo::find_by_id(&state.pool, package_id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "Package",
                    id: package_id,
                }))?;
            package.employee_limit
        }
        None => effective_limit(None),
    };

    let org = OrganizationRepo::create(&state.pool, &user.email, &input, employee_limit).await?;

    tracing::info!(
        organization_id = org.id,
        hr_email = %org.hr_email,
        employee_limit = org.employee_limit,
        "Organization registered",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: org })))
}

/// GET /api/v1/organizations/{id}
///
/// Fetch the caller's organization.
pub async fn get_organization(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let org = ensure_owned_org(&state.pool, id, &user).await?;

    Ok(Json(DataResponse { data: org }))
}

// ---------------------------------------------------------------------------
// Quota usage
// ---------------------------------------------------------------------------

/// GET /api/v1/organizations/{id}/quota
///
/// Live seat usage: `{used, max, remaining}`. `used` is recounted from the
/// affiliation registry on every call.
pub async fn get_quota(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let org = ensure_owned_org(&state.pool, id, &user).await?;

    let used = AffiliationRepo::count_active(&state.pool, org.id).await?;
    let usage = QuotaUsage::new(used, i64::from(org.employee_limit));

    Ok(Json(DataResponse { data: usage }))
}

// ---------------------------------------------------------------------------
// Roster
// ---------------------------------------------------------------------------

/// GET /api/v1/organizations/{id}/roster
///
/// Active employees with profile photo, first assignment date, and
/// assigned-asset count.
pub async fn get_roster(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let org = ensure_owned_org(&state.pool, id, &user).await?;

    let roster = RosterRepo::organization_roster(&state.pool, org.id).await?;

    Ok(Json(DataResponse { data: roster }))
}
