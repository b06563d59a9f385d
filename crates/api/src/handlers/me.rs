//! Handlers for the authenticated principal's own views: assignment history,
//! team membership, and profile.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use assetflow_db::models::user::UpsertProfile;
use assetflow_db::repositories::{AssignmentRepo, RosterRepo, UserRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::{DataResponse, PagedResponse};
use crate::state::AppState;

/// GET /api/v1/me/assignments
///
/// The caller's assignment history, newest first.
pub async fn my_assignments(
    user: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let assignments =
        AssignmentRepo::list_by_employee(&state.pool, &user.email, params.limit, params.offset)
            .await?;
    let total_count = AssignmentRepo::count_by_employee(&state.pool, &user.email).await?;

    Ok(Json(PagedResponse {
        data: assignments,
        total_count,
    }))
}

/// GET /api/v1/me/team
///
/// The caller's organizations, each with its other active members.
pub async fn my_team(user: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let team = RosterRepo::my_team(&state.pool, &user.email).await?;

    Ok(Json(DataResponse { data: team }))
}

/// PUT /api/v1/me/profile
///
/// Create or replace the caller's profile (display name, photo).
pub async fn upsert_profile(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpsertProfile>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let profile = UserRepo::upsert(&state.pool, &user.email, &input).await?;

    tracing::info!(email = %user.email, "Profile upserted");

    Ok(Json(DataResponse { data: profile }))
}
