use lazy_static::lazy_static;
use regex::Regex;

use crate::error::AuthError;

pub fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Form-level validation, run before any store call.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), AuthError> {
    if email.is_empty() || password.is_empty() {
        return Err(AuthError::MalformedInput(
            "Please fill in all fields".to_string(),
        ));
    }
    if !is_valid_email(email) {
        return Err(AuthError::MalformedInput(
            "Please enter a valid email".to_string(),
        ));
    }
    Ok(())
}
