//! User-facing error taxonomy. Display strings double as the toast text,
//! so `InvalidCredentials` deliberately carries one message for both the
//! unknown-email and wrong-password cases.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("This email is already registered")]
    DuplicateEmail,

    #[error("Password must be at least 6 characters long")]
    WeakPassword,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    #[error("{0}")]
    MalformedInput(String),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
