//! Authenticated-employee extractor for Axum handlers.
//!
//! Authentication itself happens upstream: the intranet SSO reverse proxy
//! authenticates the session and injects the employee code into the
//! `x-employee-code` header. This extractor trusts that header and resolves
//! the employee fresh from the database on every request, so role changes
//! and deactivations take effect immediately rather than living in a stale
//! session snapshot.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use nippo_core::error::CoreError;
use nippo_core::roles::Role;
use nippo_db::repositories::EmployeeRepo;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the authenticated employee code, set by the SSO proxy.
pub const EMPLOYEE_CODE_HEADER: &str = "x-employee-code";

/// Acting employee resolved from the request identity.
///
/// Use this as an extractor parameter in any handler that requires an
/// authenticated employee:
///
/// ```ignore
/// async fn my_handler(employee: AuthEmployee) -> AppResult<Json<()>> {
///     tracing::info!(employee = %employee.code, role = %employee.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthEmployee {
    /// Unique employee code (primary key of the employees table).
    pub code: String,
    /// Display name.
    pub name: String,
    /// Role, used for visibility capability checks.
    pub role: Role,
}

impl FromRequestParts<AppState> for AuthEmployee {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let code = parts
            .headers
            .get(EMPLOYEE_CODE_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing x-employee-code header".into(),
                ))
            })?;

        let employee = EmployeeRepo::find_by_code(&state.pool, code)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Unknown employee code".into()))
            })?;

        Ok(AuthEmployee {
            code: employee.code,
            name: employee.name,
            role: employee.role,
        })
    }
}
