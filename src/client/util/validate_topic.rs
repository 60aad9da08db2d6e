//! Client-side validation for the new-topic form.

use thiserror::Error;

pub const TITLE_MIN_CHARS: usize = 5;
pub const TITLE_MAX_CHARS: usize = 100;
pub const CONTENT_MIN_CHARS: usize = 20;
pub const CONTENT_MAX_CHARS: usize = 5000;

/// Field-level constraint violations, surfaced before any insert is
/// attempted against the backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopicValidationError {
    #[error("Title must be at least {TITLE_MIN_CHARS} characters")]
    TitleTooShort,
    #[error("Title must be at most {TITLE_MAX_CHARS} characters")]
    TitleTooLong,
    #[error("Please select a category")]
    MissingCategory,
    #[error("Content must be at least {CONTENT_MIN_CHARS} characters")]
    ContentTooShort,
    #[error("Content must be at most {CONTENT_MAX_CHARS} characters")]
    ContentTooLong,
}

/// Check a draft against the form constraints. Surrounding whitespace does
/// not count toward the length limits.
pub fn validate_topic(
    title: &str,
    category_id: &str,
    content: &str,
) -> Result<(), TopicValidationError> {
    let title_chars = title.trim().chars().count();
    if title_chars < TITLE_MIN_CHARS {
        return Err(TopicValidationError::TitleTooShort);
    }
    if title_chars > TITLE_MAX_CHARS {
        return Err(TopicValidationError::TitleTooLong);
    }

    if category_id.trim().is_empty() {
        return Err(TopicValidationError::MissingCategory);
    }

    let content_chars = content.trim().chars().count();
    if content_chars < CONTENT_MIN_CHARS {
        return Err(TopicValidationError::ContentTooShort);
    }
    if content_chars > CONTENT_MAX_CHARS {
        return Err(TopicValidationError::ContentTooLong);
    }

    Ok(())
}
