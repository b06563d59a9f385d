pub mod assets;
pub mod health;
pub mod me;
pub mod organizations;
pub mod packages;
pub mod requests;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /packages                          list packages (public)
///
/// /organizations                     register organization (HR)
/// /organizations/{id}                get organization (owner)
/// /organizations/{id}/quota          seat usage {used, max, remaining}
/// /organizations/{id}/roster         active employees with asset counts
/// /organizations/{id}/assets         list, create assets (owner)
/// /organizations/{id}/requests       list pending requests (owner)
///
/// /assets/{id}                       update, delete (owner)
///
/// /requests                          file a request (any authenticated)
/// /requests/{id}                     patch descriptive fields (owner)
/// /requests/{id}/approve             approval flow (owner)
///
/// /me/assignments                    own assignment history
/// /me/team                           own team view
/// /me/profile                        upsert own profile
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/packages", packages::router())
        .nest("/organizations", organizations::router())
        .nest("/assets", assets::router())
        .nest("/requests", requests::router())
        .nest("/me", me::router())
}
