//! Employee roles.
//!
//! Roles are an enumerated type checked by equality, never by comparing
//! role-name strings. The list handler branches on the capability methods
//! rather than on the variants directly, so adding a role later only means
//! deciding which capabilities it carries.

use serde::{Deserialize, Serialize};

/// Role of an employee, stored as the `employee_role` PostgreSQL enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "employee_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    General,
}

impl Role {
    /// Whether this role may list every employee's reports.
    ///
    /// General employees only ever see their own.
    pub fn can_view_all_reports(self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Lowercase role name as stored in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::General => "general",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
