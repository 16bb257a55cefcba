//! Route definitions for the daily report resource.
//!
//! Mounted at `/reports` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

/// Report routes.
///
/// ```text
/// GET    /          -> list_reports (?include_deleted)
/// POST   /          -> create_report
/// GET    /new       -> new_report (creation-form prefill)
/// GET    /{id}      -> get_report
/// PUT    /{id}      -> update_report
/// DELETE /{id}      -> delete_report
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(reports::list_reports).post(reports::create_report),
        )
        .route("/new", get(reports::new_report))
        .route(
            "/{id}",
            get(reports::get_report)
                .put(reports::update_report)
                .delete(reports::delete_report),
        )
}
