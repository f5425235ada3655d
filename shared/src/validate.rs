//! Client-side field validation
//!
//! Presence/length checks mirrored from the server's constraints. They gate
//! form submission locally; the server remains the final authority.

use thiserror::Error;

/// A failed field-level check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// Wire name of the offending field.
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// The field must be non-empty after trimming.
pub fn require(field: &'static str, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::new(field, "is required"));
    }
    Ok(())
}

/// The field must be non-empty and at most `max` characters.
pub fn require_max(field: &'static str, value: &str, max: usize) -> Result<(), FieldError> {
    require(field, value)?;
    max_len(field, value, max)
}

/// The field, when present, must be at most `max` characters.
pub fn max_len(field: &'static str, value: &str, max: usize) -> Result<(), FieldError> {
    if value.chars().count() > max {
        return Err(FieldError::new(field, format!("must be {max} characters or less")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_is_inclusive() {
        let at_limit = "x".repeat(48);
        assert!(require_max("title", &at_limit, 48).is_ok());

        let over = "x".repeat(49);
        let err = require_max("title", &over, 48).unwrap_err();
        assert_eq!(err.field, "title");
    }

    #[test]
    fn counts_characters_not_bytes() {
        let cyrillic = "и".repeat(24);
        assert!(max_len("alt", &cyrillic, 24).is_ok());
    }
}
