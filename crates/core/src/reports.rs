//! Report field constraints and validation functions.
//!
//! Limits count Unicode scalar values rather than bytes, since titles and
//! content are free text entered by people.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a report title in characters.
pub const MAX_TITLE_LENGTH: usize = 100;

/// Maximum length of the report body in characters.
pub const MAX_CONTENT_LENGTH: usize = 600;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a report title: must be non-empty and within the length limit.
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.is_empty() {
        return Err("Title cannot be empty".to_string());
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(format!(
            "Title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate report content: must be non-empty and within the length limit.
pub fn validate_content(content: &str) -> Result<(), String> {
    if content.is_empty() {
        return Err("Content cannot be empty".to_string());
    }
    if content.chars().count() > MAX_CONTENT_LENGTH {
        return Err(format!(
            "Content exceeds maximum length of {MAX_CONTENT_LENGTH} characters"
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
