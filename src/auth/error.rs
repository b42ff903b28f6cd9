use thiserror::Error;

use crate::database::DatabaseError;

/// Credential and token failures
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Username already taken")]
    DuplicateUsername,

    /// Unknown username and wrong password are deliberately the same error.
    #[error("Invalid credentials")]
    AuthFailure,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Password hashing failed")]
    PasswordHash,

    #[error("Token generation failed: {0}")]
    TokenGeneration(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}
