use crate::auth::password::{hash_password, reject_unknown_user, verify_password};
use crate::auth::AuthError;
use crate::database::models::MAX_USERNAME_LENGTH;
use crate::database::{DatabaseError, Store, User, UserId};

const MISSING_CREDENTIALS: &str = "Missing username or password";

/// Registration and credential verification over the configured store.
pub struct CredentialService<'a> {
    store: &'a dyn Store,
}

impl<'a> CredentialService<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// Create an account and return its id. Only the Argon2 hash is persisted.
    pub async fn register(&self, username: &str, password: &str) -> Result<UserId, AuthError> {
        require_credentials(username, password)?;
        if username.chars().count() > MAX_USERNAME_LENGTH {
            return Err(AuthError::InvalidInput(format!(
                "Username must be at most {} characters",
                MAX_USERNAME_LENGTH
            )));
        }

        let password_hash = hash_password(password)?;
        let user = self
            .store
            .insert_user(username, &password_hash)
            .await
            .map_err(|e| match e {
                DatabaseError::DuplicateUsername(_) => AuthError::DuplicateUsername,
                other => AuthError::Database(other),
            })?;

        tracing::info!("Registered user '{}' (id {})", user.username, user.id);
        Ok(user.id)
    }

    /// Check a username/password pair. Unknown users and wrong passwords
    /// both yield `AuthFailure`.
    pub async fn verify(&self, username: &str, password: &str) -> Result<User, AuthError> {
        require_credentials(username, password)?;

        let user = match self.store.find_user_by_username(username).await? {
            Some(user) => user,
            None => return Err(reject_unknown_user(password)),
        };

        verify_password(password, &user.password_hash)?;
        Ok(user)
    }
}

fn require_credentials(username: &str, password: &str) -> Result<(), AuthError> {
    if username.is_empty() || password.is_empty() {
        return Err(AuthError::InvalidInput(MISSING_CREDENTIALS.to_string()));
    }
    Ok(())
}
