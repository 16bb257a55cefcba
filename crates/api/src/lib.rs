//! HTTP layer for the daily report service.
//!
//! Exposed as a library so integration tests can build the exact router and
//! middleware stack the production binary uses.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod services;
pub mod state;
