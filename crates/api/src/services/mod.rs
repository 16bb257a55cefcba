//! Business-rule services sitting between handlers and repositories.

pub mod reports;
