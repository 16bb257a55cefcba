//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Methods accept `impl PgExecutor<'_>` so callers can pass either the pool
//! or an open transaction; the report service relies on the latter to keep
//! its duplicate check and write atomic.

pub mod employee_repo;
pub mod report_repo;

pub use employee_repo::EmployeeRepo;
pub use report_repo::ReportRepo;
