//! Admin gate for mutating endpoints.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use plassets_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Header naming the calling user.
pub const USER_HEADER: &str = "x-user";

/// The only user allowed to create assets. Compared case-insensitively.
pub const ADMIN_USER: &str = "admin";

/// Requires an `X-User: admin` header. Rejects with 401 Unauthorized otherwise.
///
/// Place it first in a handler's argument list so the request is refused
/// before the body is parsed:
///
/// ```ignore
/// async fn admin_only(_admin: RequireAdmin, Json(body): Json<Value>) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .headers
            .get(USER_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Missing X-User header".into()))
            })?;

        if !user.trim().eq_ignore_ascii_case(ADMIN_USER) {
            tracing::debug!(user, "Rejected non-admin user");
            return Err(AppError::Core(CoreError::Unauthorized(
                "Admin user required".into(),
            )));
        }

        Ok(RequireAdmin)
    }
}
