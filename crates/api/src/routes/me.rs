//! Route definitions for the authenticated principal's own views.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::me;
use crate::state::AppState;

/// Per-principal routes mounted at `/me`.
///
/// ```text
/// GET /assignments -> my_assignments
/// GET /team        -> my_team
/// PUT /profile     -> upsert_profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/assignments", get(me::my_assignments))
        .route("/team", get(me::my_team))
        .route("/profile", put(me::upsert_profile))
}
