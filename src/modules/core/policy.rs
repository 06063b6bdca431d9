//! Query validation policy
//!
//! A conservative allow-list: after trimming and case-normalizing, a query
//! must begin with `SELECT`. Everything else is rejected before any backend
//! I/O happens. This is deliberately not a SQL parser and must not grow
//! into one.

use crate::error::DataportError;

/// Validate a query against the read-only policy
///
/// Returns `Validation` for the empty query and for any statement whose
/// leading keyword is not `SELECT`.
pub fn validate_query(query: &str) -> Result<(), DataportError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(DataportError::Validation("empty query".to_string()));
    }

    if trimmed.to_uppercase().starts_with("SELECT") {
        return Ok(());
    }

    let keyword = trimmed
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_uppercase();
    Err(DataportError::Validation(format!(
        "only SELECT statements are allowed, got '{}'",
        keyword
    )))
}
