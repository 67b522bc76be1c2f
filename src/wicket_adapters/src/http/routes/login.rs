use axum::{Json, extract::State, response::IntoResponse};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use wicket_application::LoginUseCase;
use wicket_core::CredentialVerifier;

use super::error::AccountApiError;
use crate::auth::{SessionTokenConfig, generate_session_token};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: Secret<String>,
}

#[derive(Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Login is the one surface without input validation: whatever arrives is
/// handed to the verifier, and any mismatch (wrong, unknown, or empty
/// credentials alike) comes back as 401.
#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<V>(
    State((credential_verifier, token_config)): State<(V, SessionTokenConfig)>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AccountApiError>
where
    V: CredentialVerifier + Clone + 'static,
{
    let use_case = LoginUseCase::new(credential_verifier);

    let username = use_case.execute(request.username, request.password).await?;
    let token = generate_session_token(&username, &token_config)?;

    Ok(Json(LoginResponse { token }))
}
