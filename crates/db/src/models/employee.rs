//! Employee entity model.

use nippo_core::roles::Role;
use nippo_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;

/// An employee row from the `employees` table.
///
/// Credentials live with the employee-management system; this service only
/// ever reads the identity fields it needs to resolve a request.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employee {
    pub code: String,
    pub name: String,
    pub role: Role,
    pub delete_flg: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
