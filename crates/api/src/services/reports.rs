//! Report service: the duplicate-date rule, ownership assignment, and
//! soft delete, layered over [`ReportRepo`].
//!
//! Every mutating operation runs inside a single transaction so the
//! duplicate check and the write cannot be interleaved by a concurrent
//! request passing the same check.

use nippo_core::types::DbId;
use nippo_db::models::report::{NewReport, Report};
use nippo_db::repositories::ReportRepo;
use nippo_db::DbPool;

/// Rejections produced by the report service.
#[derive(Debug, thiserror::Error)]
pub enum ReportServiceError {
    /// An active report already exists for this employee and date.
    #[error("a report for this employee and date already exists")]
    DateDuplicate,

    /// No report with the given id.
    #[error("report {0} not found")]
    NotFound(DbId),

    /// The underlying storage failed.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Orchestrates report business rules over the repository layer.
pub struct ReportService;

impl ReportService {
    /// Create a report owned by the given employee.
    ///
    /// Rejects with [`ReportServiceError::DateDuplicate`] if the employee
    /// already has an active report for the same date. The check and the
    /// insert share one transaction.
    pub async fn create(
        pool: &DbPool,
        employee_code: &str,
        input: &NewReport,
    ) -> Result<Report, ReportServiceError> {
        let mut tx = pool.begin().await?;

        if ReportRepo::exists_active_for_date(&mut *tx, employee_code, input.report_date).await? {
            return Err(ReportServiceError::DateDuplicate);
        }

        let report = ReportRepo::insert(&mut *tx, employee_code, input).await?;
        tx.commit().await?;

        tracing::info!(
            report_id = report.id,
            employee = %report.employee_code,
            report_date = %report.report_date,
            "Report created"
        );
        Ok(report)
    }

    /// Update a report's date, title, and content.
    ///
    /// The owner and creation timestamp always come from the stored row,
    /// never from the payload. Changing the date to one already used by
    /// another active report of the same owner is rejected; keeping the
    /// report's own date never conflicts.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &NewReport,
    ) -> Result<Report, ReportServiceError> {
        let mut tx = pool.begin().await?;

        let previous = ReportRepo::find_by_id(&mut *tx, id)
            .await?
            .ok_or(ReportServiceError::NotFound(id))?;

        if input.report_date != previous.report_date
            && ReportRepo::exists_active_for_date(
                &mut *tx,
                &previous.employee_code,
                input.report_date,
            )
            .await?
        {
            return Err(ReportServiceError::DateDuplicate);
        }

        let report = ReportRepo::update(&mut *tx, id, input)
            .await?
            .ok_or(ReportServiceError::NotFound(id))?;
        tx.commit().await?;

        tracing::info!(report_id = report.id, employee = %report.employee_code, "Report updated");
        Ok(report)
    }

    /// Soft-delete a report by id.
    ///
    /// The flag flip is an explicit repository write, and a missing id is a
    /// [`ReportServiceError::NotFound`] rather than a silent success.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<(), ReportServiceError> {
        if !ReportRepo::soft_delete(pool, id).await? {
            return Err(ReportServiceError::NotFound(id));
        }
        tracing::info!(report_id = id, "Report soft-deleted");
        Ok(())
    }
}
