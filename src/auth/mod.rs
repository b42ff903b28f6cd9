pub mod error;
pub mod password;

use axum::http::{header::AUTHORIZATION, HeaderMap};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::SecurityConfig;
use crate::database::UserId;

pub use error::AuthError;

/// Token payload. `exp` is only present when an expiry is configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub id: UserId,
    pub username: String,
    pub iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

/// Authenticated caller, decoded once per request from the bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: UserId,
    pub username: String,
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.id,
            username: claims.username,
        }
    }
}

/// Issues and verifies HS256-signed identity tokens
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry_hours: Option<u64>,
}

impl TokenService {
    pub fn new(secret: &str, expiry_hours: Option<u64>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiry_hours,
        }
    }

    pub fn from_config(security: &SecurityConfig) -> Self {
        Self::new(&security.jwt_secret, security.jwt_expiry_hours)
    }

    pub fn issue(&self, id: UserId, username: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = match self.expiry_hours {
            Some(hours) => Some(expires_at(now, hours)?),
            None => None,
        };
        let claims = Claims {
            id,
            username: username.to_string(),
            iat: now.timestamp(),
            exp,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenGeneration(e.to_string()))
    }

    pub fn verify(&self, token: &str) -> Result<Identity, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // exp is optional; when present it is still checked
        validation.required_spec_claims.clear();
        validation.validate_exp = true;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims.into())
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}

fn expires_at(now: DateTime<Utc>, hours: u64) -> Result<i64, AuthError> {
    i64::try_from(hours)
        .ok()
        .and_then(Duration::try_hours)
        .and_then(|ttl| now.checked_add_signed(ttl))
        .map(|at| at.timestamp())
        .ok_or_else(|| {
            AuthError::TokenGeneration(format!("token lifetime of {}h is out of range", hours))
        })
}

/// Extract the token from an `Authorization: Bearer <token>` header
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, &'static str> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or("Missing Authorization header")?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format")?;

    match auth_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        Some(_) => Err("Empty bearer token"),
        None => Err("Authorization header must use Bearer token format"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn issued_token_round_trips_identity() {
        let tokens = TokenService::new("test-secret", None);
        let token = tokens.issue(7, "alice").unwrap();

        let identity = tokens.verify(&token).unwrap();
        assert_eq!(
            identity,
            Identity {
                id: 7,
                username: "alice".into()
            }
        );
    }

    #[test]
    fn no_expiry_claim_without_configured_lifetime() {
        let tokens = TokenService::new("test-secret", None);
        let token = tokens.issue(1, "alice").unwrap();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        let data = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"test-secret"),
            &validation,
        )
        .unwrap();
        assert_eq!(data.claims.exp, None);
    }

    #[test]
    fn configured_lifetime_sets_expiry() {
        let tokens = TokenService::new("test-secret", Some(2));
        let token = tokens.issue(1, "alice").unwrap();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        let claims = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"test-secret"),
            &validation,
        )
        .unwrap()
        .claims;
        assert_eq!(claims.exp, Some(claims.iat + 2 * 3600));
    }

    #[test]
    fn out_of_range_lifetime_is_an_error_not_a_panic() {
        for hours in [3_000_000_000, u64::MAX] {
            let err = TokenService::new("test-secret", Some(hours))
                .issue(1, "alice")
                .unwrap_err();
            assert!(matches!(err, AuthError::TokenGeneration(_)), "{}h", hours);
        }
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = TokenService::new("one", None).issue(1, "alice").unwrap();
        let err = TokenService::new("two", None).verify(&token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[test]
    fn tampered_and_malformed_tokens_are_rejected() {
        let tokens = TokenService::new("test-secret", None);
        let token = tokens.issue(1, "alice").unwrap();

        let mut parts: Vec<&str> = token.split('.').collect();
        let forged_payload = TokenService::new("other", None).issue(2, "mallory").unwrap();
        let forged_claims = forged_payload.split('.').nth(1).unwrap().to_string();
        parts[1] = &forged_claims;
        assert!(tokens.verify(&parts.join(".")).is_err());

        assert!(tokens.verify("not-a-token").is_err());
        assert!(tokens.verify("").is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let tokens = TokenService::new("test-secret", Some(1));
        let now = Utc::now().timestamp();
        let claims = Claims {
            id: 1,
            username: "alice".into(),
            iat: now - 7200,
            exp: Some(now - 3600),
        };
        let token = encode(&Header::default(), &claims, &tokens.encoding_key).unwrap();
        assert!(matches!(
            tokens.verify(&token),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn bearer_extraction() {
        let mut headers = HeaderMap::new();
        assert_eq!(
            extract_bearer_token(&headers),
            Err("Missing Authorization header")
        );

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert!(extract_bearer_token(&headers).is_err());

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer   "));
        assert_eq!(extract_bearer_token(&headers), Err("Empty bearer token"));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(extract_bearer_token(&headers), Ok("abc.def.ghi"));
    }
}
