//! Route tree assembly.

use axum::Router;

use crate::state::AppState;

pub mod health;
pub mod reports;

/// All `/api/v1` routes.
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/reports", reports::router())
}
