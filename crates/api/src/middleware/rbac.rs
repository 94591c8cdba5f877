//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does not
//! meet the minimum requirement. Use these in route handlers to enforce
//! authorization at the type level. Ownership checks (a client acting on its
//! own design) live in `stampa_core::policy`, not here.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use stampa_core::error::CoreError;
use stampa_core::policy::ensure_can_review;
use stampa_core::roles::ROLE_ADMIN;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `admin` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}

/// Requires `designer` or `admin` role. Rejects with 403 Forbidden otherwise.
///
/// Review operations (approve, reject, technical sheets, pending queue) are
/// gated on this extractor.
///
/// ```ignore
/// async fn designer_or_admin(RequireDesigner(user): RequireDesigner) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireDesigner(pub AuthUser);

impl FromRequestParts<AppState> for RequireDesigner {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        ensure_can_review(&user.role)?;
        Ok(RequireDesigner(user))
    }
}
