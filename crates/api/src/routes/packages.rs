//! Route definitions for the subscription package listing.

use axum::routing::get;
use axum::Router;

use crate::handlers::packages;
use crate::state::AppState;

/// Package routes mounted at `/packages`.
///
/// ```text
/// GET / -> list_packages (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(packages::list_packages))
}
