use std::sync::OnceLock;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use super::error::AuthError;

/// Hash a password using Argon2id with a random salt. Returns a PHC string.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored hash.
pub fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::AuthFailure)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::AuthFailure)
}

static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

/// Run a full Argon2 verification against a throwaway hash, so a login for an
/// unknown username costs the same as a wrong password. Always fails.
pub fn reject_unknown_user(password: &str) -> AuthError {
    let dummy = DUMMY_HASH.get_or_init(|| hash_password("unknown-user-placeholder").ok());
    if let Some(hash) = dummy {
        let _ = verify_password(password, hash);
    }
    AuthError::AuthFailure
}
