//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does
//! not meet the minimum requirement.

use assetflow_core::error::CoreError;
use assetflow_core::roles::ROLE_HR;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `hr` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn hr_only(RequireHr(user): RequireHr) -> AppResult<Json<()>> {
///     // user is guaranteed to be an HR account here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireHr(pub AuthUser);

impl FromRequestParts<AppState> for RequireHr {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_HR {
            return Err(AppError::Core(CoreError::Forbidden(
                "HR role required".into(),
            )));
        }
        Ok(RequireHr(user))
    }
}

/// Requires any authenticated principal (any valid role).
///
/// Functionally equivalent to [`AuthUser`] but named explicitly for use in
/// route definitions where the intent "this route requires authentication"
/// should be self-documenting.
pub struct RequireAuth(pub AuthUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        Ok(RequireAuth(user))
    }
}
