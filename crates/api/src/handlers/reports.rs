//! Handlers for the `/reports` resource.
//!
//! Listing is visibility-filtered by the acting employee's role capability:
//! administrators see every employee's reports, everyone else sees only
//! their own. Ownership is always taken from the authenticated employee,
//! never from the payload.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use nippo_core::error::CoreError;
use nippo_core::reports::{validate_content, validate_title};
use nippo_core::types::DbId;
use nippo_db::models::report::{NewReport, ReportWithEmployee};
use nippo_db::repositories::ReportRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthEmployee;
use crate::response::DataResponse;
use crate::services::reports::ReportService;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response shapes
// ---------------------------------------------------------------------------

/// Query parameters for the report listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListReportsParams {
    /// Also show soft-deleted reports (default: false).
    #[serde(default)]
    pub include_deleted: bool,
}

/// Listing payload: the visible reports plus their count.
#[derive(Debug, Serialize)]
pub struct ReportList {
    pub reports: Vec<ReportWithEmployee>,
    pub count: usize,
}

/// Prefill data for the report creation form.
#[derive(Debug, Serialize)]
pub struct ReportPrefill {
    pub employee_name: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /reports?include_deleted=
///
/// List reports visible to the acting employee, with their count.
pub async fn list_reports(
    auth: AuthEmployee,
    State(state): State<AppState>,
    Query(params): Query<ListReportsParams>,
) -> AppResult<impl IntoResponse> {
    let reports = if auth.role.can_view_all_reports() {
        ReportRepo::list_all(&state.pool, params.include_deleted).await?
    } else {
        ReportRepo::list_by_employee(&state.pool, &auth.code, params.include_deleted).await?
    };

    let count = reports.len();
    Ok(Json(DataResponse {
        data: ReportList { reports, count },
    }))
}

/// GET /reports/new
///
/// Prefill data for the creation form: the acting employee's display name.
pub async fn new_report(auth: AuthEmployee) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: ReportPrefill {
            employee_name: auth.name,
        },
    }))
}

/// GET /reports/{id}
///
/// Report detail by id. Soft-deleted reports are still returned (with
/// `delete_flg` set); unknown ids are 404.
pub async fn get_report(
    _auth: AuthEmployee,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let report = ReportRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Report",
                id,
            })
        })?;

    Ok(Json(DataResponse { data: report }))
}

/// POST /reports
///
/// Create a report owned by the acting employee.
pub async fn create_report(
    auth: AuthEmployee,
    State(state): State<AppState>,
    Json(input): Json<NewReport>,
) -> AppResult<impl IntoResponse> {
    validate_payload(&input)?;

    let report = ReportService::create(&state.pool, &auth.code, &input).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: report })))
}

/// PUT /reports/{id}
///
/// Update a report's date, title, and content. The owner and creation
/// timestamp are preserved from the stored row regardless of the payload.
pub async fn update_report(
    _auth: AuthEmployee,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<NewReport>,
) -> AppResult<impl IntoResponse> {
    validate_payload(&input)?;

    let report = ReportService::update(&state.pool, id, &input).await?;

    Ok(Json(DataResponse { data: report }))
}

/// DELETE /reports/{id}
///
/// Soft-delete a report. The row stays fetchable by id afterwards.
pub async fn delete_report(
    _auth: AuthEmployee,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ReportService::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Field-level validation shared by create and update.
fn validate_payload(input: &NewReport) -> Result<(), AppError> {
    validate_title(&input.title).map_err(AppError::BadRequest)?;
    validate_content(&input.content).map_err(AppError::BadRequest)?;
    Ok(())
}
