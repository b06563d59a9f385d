//! Handlers for the asset inventory.
//!
//! All asset mutations are tenant-scoped: the verified principal email must
//! match the owning organization's HR account email.

use assetflow_core::assets::validate_asset_type;
use assetflow_core::error::CoreError;
use assetflow_core::types::DbId;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use assetflow_db::models::asset::{Asset, CreateAsset, UpdateAsset};
use assetflow_db::repositories::AssetRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::organizations::ensure_owned_org;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireAuth, RequireHr};
use crate::query::PaginationParams;
use crate::response::{DataResponse, PagedResponse};
use crate::state::AppState;

/// Load an asset and verify the caller owns its organization.
async fn ensure_owned_asset(
    pool: &sqlx::PgPool,
    asset_id: DbId,
    user: &AuthUser,
) -> AppResult<Asset> {
    let asset = AssetRepo::find_by_id(pool, asset_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Asset",
            id: asset_id,
        }))?;

    ensure_owned_org(pool, asset.organization_id, user).await?;

    Ok(asset)
}

/// POST /api/v1/organizations/{id}/assets
///
/// Register a new asset. HR owner only.
pub async fn create_asset(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Path(organization_id): Path<DbId>,
    Json(input): Json<CreateAsset>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    if let Some(ref asset_type) = input.asset_type {
        validate_asset_type(asset_type).map_err(|e| AppError::Core(CoreError::Validation(e)))?;
    }

    let org = ensure_owned_org(&state.pool, organization_id, &user).await?;

    let asset = AssetRepo::create(&state.pool, org.id, &input).await?;

    tracing::info!(
        asset_id = asset.id,
        organization_id = org.id,
        name = %asset.name,
        quantity = asset.quantity,
        "Asset registered",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: asset })))
}

/// GET /api/v1/organizations/{id}/assets
///
/// Paginated asset listing for the owning organization, with the unpaged
/// total for page computation.
pub async fn list_assets(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(organization_id): Path<DbId>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let org = ensure_owned_org(&state.pool, organization_id, &user).await?;

    let assets =
        AssetRepo::list_by_organization(&state.pool, org.id, params.limit, params.offset).await?;
    let total_count = AssetRepo::count_by_organization(&state.pool, org.id).await?;

    Ok(Json(PagedResponse {
        data: assets,
        total_count,
    }))
}

/// PUT /api/v1/assets/{id}
///
/// Update an asset's fields. HR owner only.
pub async fn update_asset(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAsset>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    if let Some(ref asset_type) = input.asset_type {
        validate_asset_type(asset_type).map_err(|e| AppError::Core(CoreError::Validation(e)))?;
    }

    ensure_owned_asset(&state.pool, id, &user).await?;

    let asset = AssetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Asset",
            id,
        }))?;

    tracing::info!(asset_id = id, "Asset updated");

    Ok(Json(DataResponse { data: asset }))
}

/// DELETE /api/v1/assets/{id}
///
/// Delete an asset. Assignment snapshots survive (their asset reference is
/// nulled). HR owner only.
pub async fn delete_asset(
    RequireHr(user): RequireHr,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_owned_asset(&state.pool, id, &user).await?;

    let deleted = AssetRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Asset",
            id,
        }));
    }

    tracing::info!(asset_id = id, "Asset deleted");

    Ok(StatusCode::NO_CONTENT)
}
