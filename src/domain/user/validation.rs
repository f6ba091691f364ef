//! User field validation

use thiserror::Error;

/// Maximum length of a user ID
pub const MAX_USER_ID_LENGTH: usize = 64;

/// Validation errors for user fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    #[error("User ID cannot be empty")]
    EmptyId,

    #[error("User ID cannot exceed {MAX_USER_ID_LENGTH} characters")]
    IdTooLong,

    #[error("User ID cannot contain whitespace or control characters")]
    InvalidIdCharacters,

    #[error("Age cannot be negative")]
    NegativeAge,
}

/// Validate a user ID: non-empty, bounded, no whitespace/control characters
pub fn validate_user_id(id: &str) -> Result<(), UserValidationError> {
    if id.is_empty() {
        return Err(UserValidationError::EmptyId);
    }

    if id.len() > MAX_USER_ID_LENGTH {
        return Err(UserValidationError::IdTooLong);
    }

    if id.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(UserValidationError::InvalidIdCharacters);
    }

    Ok(())
}

/// Validate an optional age value
pub fn validate_age(age: Option<i32>) -> Result<(), UserValidationError> {
    match age {
        Some(a) if a < 0 => Err(UserValidationError::NegativeAge),
        _ => Ok(()),
    }
}
