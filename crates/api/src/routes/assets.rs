//! Route definitions for direct asset access.
//!
//! Creation and listing live under the owning organization; see
//! `routes/organizations.rs`.

use axum::routing::put;
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

/// Asset routes mounted at `/assets`.
///
/// ```text
/// PUT    /{id} -> update_asset (owner)
/// DELETE /{id} -> delete_asset (owner)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        put(assets::update_asset).delete(assets::delete_asset),
    )
}
