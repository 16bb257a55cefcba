//! Repository for the `reports` table.

use nippo_core::types::{DbId, ReportDate};
use sqlx::PgExecutor;

use crate::models::report::{NewReport, Report, ReportWithEmployee};

/// Column list for reports queries.
const COLUMNS: &str =
    "id, report_date, title, content, employee_code, delete_flg, created_at, updated_at";

/// Column list for reports joined with the owner's name.
const JOINED_COLUMNS: &str = "r.id, r.report_date, r.title, r.content, r.employee_code, \
    e.name AS employee_name, r.delete_flg, r.created_at, r.updated_at";

/// Provides CRUD operations for daily reports.
pub struct ReportRepo;

impl ReportRepo {
    /// Insert a new report owned by the given employee, returning the
    /// created row. Timestamps and the delete flag take their column
    /// defaults (`now()`, `FALSE`).
    pub async fn insert<'e>(
        executor: impl PgExecutor<'e>,
        employee_code: &str,
        input: &NewReport,
    ) -> Result<Report, sqlx::Error> {
        let query = format!(
            "INSERT INTO reports (report_date, title, content, employee_code)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(input.report_date)
            .bind(&input.title)
            .bind(&input.content)
            .bind(employee_code)
            .fetch_one(executor)
            .await
    }

    /// Update a report's date, title, and content, returning the updated
    /// row. The owner and `created_at` are never touched; the delete flag
    /// is forced back to active and `updated_at` is re-stamped.
    pub async fn update<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
        input: &NewReport,
    ) -> Result<Option<Report>, sqlx::Error> {
        let query = format!(
            "UPDATE reports SET
                report_date = $2,
                title = $3,
                content = $4,
                delete_flg = FALSE,
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .bind(input.report_date)
            .bind(&input.title)
            .bind(&input.content)
            .fetch_optional(executor)
            .await
    }

    /// Find a report by its ID. No delete-flag filter: soft-deleted reports
    /// stay fetchable by id so their detail remains viewable.
    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Report>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reports WHERE id = $1");
        sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List every employee's reports joined with owner names, newest report
    /// date first. Soft-deleted rows are excluded unless `include_deleted`.
    pub async fn list_all<'e>(
        executor: impl PgExecutor<'e>,
        include_deleted: bool,
    ) -> Result<Vec<ReportWithEmployee>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM reports r
             JOIN employees e ON e.code = r.employee_code
             WHERE ($1 OR r.delete_flg = FALSE)
             ORDER BY r.report_date DESC, r.id DESC"
        );
        sqlx::query_as::<_, ReportWithEmployee>(&query)
            .bind(include_deleted)
            .fetch_all(executor)
            .await
    }

    /// List one employee's reports, newest report date first.
    pub async fn list_by_employee<'e>(
        executor: impl PgExecutor<'e>,
        employee_code: &str,
        include_deleted: bool,
    ) -> Result<Vec<ReportWithEmployee>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM reports r
             JOIN employees e ON e.code = r.employee_code
             WHERE r.employee_code = $1 AND ($2 OR r.delete_flg = FALSE)
             ORDER BY r.report_date DESC, r.id DESC"
        );
        sqlx::query_as::<_, ReportWithEmployee>(&query)
            .bind(employee_code)
            .bind(include_deleted)
            .fetch_all(executor)
            .await
    }

    /// Whether an active (not soft-deleted) report already exists for the
    /// given employee and date.
    pub async fn exists_active_for_date<'e>(
        executor: impl PgExecutor<'e>,
        employee_code: &str,
        report_date: ReportDate,
    ) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT 1 FROM reports
                WHERE employee_code = $1 AND report_date = $2 AND delete_flg = FALSE
             )",
        )
        .bind(employee_code)
        .bind(report_date)
        .fetch_one(executor)
        .await?;
        Ok(exists)
    }

    /// Soft-delete a report: an explicit UPDATE setting the flag and
    /// stamping `updated_at`. Returns `false` if the id does not exist.
    pub async fn soft_delete<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE reports SET delete_flg = TRUE, updated_at = now() WHERE id = $1",
        )
        .bind(id)
        .execute(executor)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
