//! Handler for the static subscription package listing.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use assetflow_db::repositories::PackageRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/packages
///
/// Seeded reference data; public.
pub async fn list_packages(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let packages = PackageRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: packages }))
}
