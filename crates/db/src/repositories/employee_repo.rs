//! Repository for the `employees` table (read-only lookups).

use sqlx::PgExecutor;

use crate::models::employee::Employee;

/// Column list for employees queries.
const COLUMNS: &str = "code, name, role, delete_flg, created_at, updated_at";

/// Read-side lookups against the employee table. Employee lifecycle
/// management belongs to the wider system, so there are no writes here.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Find an active employee by code. Soft-deleted employees are treated
    /// as absent so a removed account can no longer act.
    pub async fn find_by_code<'e>(
        executor: impl PgExecutor<'e>,
        code: &str,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM employees WHERE code = $1 AND delete_flg = FALSE");
        sqlx::query_as::<_, Employee>(&query)
            .bind(code)
            .fetch_optional(executor)
            .await
    }
}
