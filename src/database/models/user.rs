use sqlx::FromRow;

pub type UserId = i64;

/// Column width of `users.username`
pub const MAX_USERNAME_LENGTH: usize = 80;

/// Registered account. Only the salted hash of the password is ever stored.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password_hash: String,
}
