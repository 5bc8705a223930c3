//! Validation helpers for DTOs.

use validator::ValidationError;

/// Validates that a game title contains at least one non-whitespace character.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        let mut err = ValidationError::new("title_blank");
        err.message = Some("title must not be blank".into());
        return Err(err);
    }

    Ok(())
}
