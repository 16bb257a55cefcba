//! Domain types and validation for the daily report service.
//!
//! This crate is persistence- and HTTP-agnostic: it holds the id/timestamp
//! aliases, the domain error type, the employee role enum, and the report
//! field constraints. Everything that touches the database lives in
//! `nippo-db`; everything that touches HTTP lives in `nippo-api`.

pub mod error;
pub mod reports;
pub mod roles;
pub mod types;
