use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wicket_core::Username;

/// Signing secret and lifetime for session tokens.
#[derive(Clone)]
pub struct SessionTokenConfig {
    pub secret: Secret<String>,
    pub time_to_live_in_seconds: i64,
}

#[derive(Debug, Error)]
pub enum SessionTokenError {
    #[error("Token error: {0}")]
    TokenError(jsonwebtoken::errors::Error),
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

/// Create a signed session token for an authenticated username.
///
/// The token is a stateless HS256 JWT carrying the username as subject; it is
/// handed to the client in the login response body and never persisted, so
/// there is no revocation.
pub fn generate_session_token(
    username: &Username,
    config: &SessionTokenConfig,
) -> Result<String, SessionTokenError> {
    let delta = chrono::Duration::try_seconds(config.time_to_live_in_seconds).ok_or(
        SessionTokenError::UnexpectedError("Failed to create session token duration".to_string()),
    )?;

    let exp = Utc::now()
        .checked_add_signed(delta)
        .ok_or(SessionTokenError::UnexpectedError(
            "Duration out of range".to_string(),
        ))?
        .timestamp();

    let exp: usize = exp.try_into().map_err(|_| {
        SessionTokenError::UnexpectedError("Failed to cast i64 to usize".to_string())
    })?;

    let claims = Claims {
        sub: username.as_str().to_owned(),
        exp,
    };

    encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.expose_secret().as_bytes()),
    )
    .map_err(SessionTokenError::TokenError)
}

/// Check signature and expiry of a session token, returning its claims.
pub fn validate_session_token(
    token: &str,
    config: &SessionTokenConfig,
) -> Result<Claims, SessionTokenError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.expose_secret().as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(SessionTokenError::TokenError)
}
