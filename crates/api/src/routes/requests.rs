//! Route definitions for the request lifecycle.

use axum::routing::{patch, post};
use axum::Router;

use crate::handlers::requests;
use crate::state::AppState;

/// Request routes mounted at `/requests`.
///
/// ```text
/// POST   /              -> create_request (any authenticated)
/// PATCH  /{id}          -> patch_request (owner; status changes rejected)
/// POST   /{id}/approve  -> approve_request (owner)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(requests::create_request))
        .route("/{id}", patch(requests::patch_request))
        .route("/{id}/approve", post(requests::approve_request))
}
