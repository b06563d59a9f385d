//! Handlers for the request lifecycle: filing, listing, patching, approval.

use assetflow_core::error::CoreError;
use assetflow_core::types::DbId;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use assetflow_db::models::request::{ApproveRequest, CreateRequest, Request, UpdateRequest};
use assetflow_db::repositories::{ApprovalRepo, OrganizationRepo, RequestRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::organizations::ensure_owned_org;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireHr;
use crate::query::PaginationParams;
use crate::response::{DataResponse, PagedResponse};
use crate::state::AppState;

/// Load a request and verify the caller owns its organization.
async fn ensure_owned_request(
    pool: &sqlx::PgPool,
    request_id: DbId,
    user: &AuthUser,
) -> AppResult<Request> {
    let request = RequestRepo::find_by_id(pool, request_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Request",
            id: request_id,
        }))?;

    ensure_owned_org(pool, request.organization_id, user).await?;

    Ok(request)
}

/// POST /api/v1/requests
///
/// File a new pending request. The requester identity comes from the
/// verified principal; the target organization must exist.
pub async fn create_request(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    OrganizationRepo::find_by_id(&state.pool, input.organization_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Organization",
            id: input.organization_id,
        }))?;

    let request = RequestRepo::create(&state.pool, &user.email, &input).await?;

    tracing::info!(
        request_id = request.id,
        organization_id = request.organization_id,
        requester = %request.requester_email,
        "Request filed",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: request })))
}

/// GET /api/v1/organizations/{id}/requests
///
/// Paginated pending requests for the owning organization, oldest first.
pub async fn list_pending_requests(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Path(organization_id): Path<DbId>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let org = ensure_owned_org(&state.pool, organization_id, &user).await?;

    let requests = RequestRepo::list_pending_by_organization(
        &state.pool,
        org.id,
        params.limit,
        params.offset,
    )
    .await?;
    let total_count = RequestRepo::count_pending_by_organization(&state.pool, org.id).await?;

    Ok(Json(PagedResponse {
        data: requests,
        total_count,
    }))
}

/// POST /api/v1/requests/{id}/approve
///
/// Run the approval flow for a pending request against the asset named in
/// the body. Returns the created assignment.
pub async fn approve_request(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ApproveRequest>,
) -> AppResult<impl IntoResponse> {
    ensure_owned_request(&state.pool, id, &user).await?;

    let assignment = ApprovalRepo::approve(&state.pool, id, input.asset_id).await?;

    tracing::info!(
        request_id = id,
        asset_id = input.asset_id,
        assignment_id = assignment.id,
        employee = %assignment.employee_email,
        "Request approved",
    );

    Ok(Json(DataResponse { data: assignment }))
}

/// PATCH /api/v1/requests/{id}
///
/// Patch descriptive request fields. Any attempt to set `status` here is
/// rejected: lifecycle transitions happen only through the approve endpoint.
pub async fn patch_request(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRequest>,
) -> AppResult<impl IntoResponse> {
    if input.status.is_some() {
        return Err(AppError::Core(CoreError::Validation(
            "Request status cannot be changed through patch; use the approve endpoint".into(),
        )));
    }
    input.validate()?;

    ensure_owned_request(&state.pool, id, &user).await?;

    let request = RequestRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Request",
            id,
        }))?;

    tracing::info!(request_id = id, "Request patched");

    Ok(Json(DataResponse { data: request }))
}
