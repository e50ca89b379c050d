//! Form validation errors

use thiserror::Error;

/// Errors raised when a form payload is rejected before it is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was missing or blank.
    #[error("{0} is required")]
    Required(&'static str),

    /// Password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// Password shorter than [`MIN_PASSWORD_LENGTH`](crate::users::MIN_PASSWORD_LENGTH).
    #[error("password must be at least {0} characters")]
    PasswordTooShort(usize),
}

/// Reject `value` when it is empty or whitespace only.
///
/// # Errors
///
/// Returns [`ValidationError::Required`] naming `field`.
pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_blank_values() {
        assert_eq!(
            require("email", "   "),
            Err(ValidationError::Required("email"))
        );
        assert_eq!(require("email", ""), Err(ValidationError::Required("email")));
    }

    #[test]
    fn require_accepts_text() {
        assert_eq!(require("email", "a@b.com"), Ok(()));
    }
}
