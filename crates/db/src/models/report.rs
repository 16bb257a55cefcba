//! Report entity model and DTOs.

use nippo_core::types::{DbId, ReportDate, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reports` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Report {
    pub id: DbId,
    pub report_date: ReportDate,
    pub title: String,
    pub content: String,
    pub employee_code: String,
    pub delete_flg: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A report joined with its owner's display name, for list views.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReportWithEmployee {
    pub id: DbId,
    pub report_date: ReportDate,
    pub title: String,
    pub content: String,
    pub employee_code: String,
    pub employee_name: String,
    pub delete_flg: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Payload for creating or updating a report.
///
/// Deliberately has no employee field: the owner is always the
/// authenticated employee, assigned server-side.
#[derive(Debug, Clone, Deserialize)]
pub struct NewReport {
    pub report_date: ReportDate,
    pub title: String,
    pub content: String,
}
