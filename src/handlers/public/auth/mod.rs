// handlers/public/auth/mod.rs - Account creation and token acquisition
use serde::Deserialize;

pub mod login;
pub mod register;

pub use login::login;
pub use register::register;

/// Body shared by /register and /login. Fields are optional so that a
/// missing field reports as a 400 rather than a deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct CredentialsRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl CredentialsRequest {
    pub(crate) fn into_parts(self) -> (String, String) {
        (
            self.username.unwrap_or_default(),
            self.password.unwrap_or_default(),
        )
    }
}
