//! Route definitions for organizations and their nested collections.
//!
//! All routes are mounted under `/organizations`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{assets, organizations, requests};
use crate::state::AppState;

/// Organization routes mounted at `/organizations`.
///
/// ```text
/// POST   /               -> create_organization (HR)
/// GET    /{id}           -> get_organization (owner)
/// GET    /{id}/quota     -> get_quota (owner)
/// GET    /{id}/roster    -> get_roster (owner)
/// GET    /{id}/assets    -> list_assets (owner)
/// POST   /{id}/assets    -> create_asset (owner)
/// GET    /{id}/requests  -> list_pending_requests (owner)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(organizations::create_organization))
        .route("/{id}", get(organizations::get_organization))
        .route("/{id}/quota", get(organizations::get_quota))
        .route("/{id}/roster", get(organizations::get_roster))
        .route(
            "/{id}/assets",
            get(assets::list_assets).post(assets::create_asset),
        )
        .route("/{id}/requests", get(requests::list_pending_requests))
}
