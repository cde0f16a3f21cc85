//! Field rules for create and update payloads.

use thiserror::Error;

use super::models::BookPayload;

/// The first rule a payload broke. The display text is the exact message
/// returned to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is mandatory")]
    MissingTitle,
    #[error("Author is mandatory")]
    MissingAuthor,
    #[error("Price must be positive")]
    NegativePrice,
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Check title, then author, then price; stop at the first failure.
/// `genre` is never checked.
pub fn validate(candidate: &BookPayload) -> Result<(), ValidationError> {
    if is_blank(candidate.title.as_deref()) {
        return Err(ValidationError::MissingTitle);
    }
    if is_blank(candidate.author.as_deref()) {
        return Err(ValidationError::MissingAuthor);
    }
    if candidate.price < 0.0 {
        return Err(ValidationError::NegativePrice);
    }
    Ok(())
}
