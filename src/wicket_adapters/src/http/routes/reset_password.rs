use axum::{Json, extract::State, response::IntoResponse};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use wicket_application::ResetPasswordUseCase;
use wicket_core::{AccountStore, Email};

use super::error::AccountApiError;

#[derive(Debug, Deserialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

/// Carries the freshly generated password back to the caller in plaintext.
/// That is the documented contract of this endpoint; the value exists nowhere
/// else once the store has hashed it.
#[derive(Serialize, Deserialize)]
pub struct PasswordResetResponse {
    pub password: String,
}

#[tracing::instrument(name = "Reset password", skip_all)]
pub async fn reset_password<S>(
    State(account_store): State<S>,
    Json(request): Json<PasswordResetRequest>,
) -> Result<impl IntoResponse, AccountApiError>
where
    S: AccountStore + Clone + 'static,
{
    let use_case = ResetPasswordUseCase::new(account_store);

    // unlike login, this surface validates the address up front
    let email = Email::parse(request.email)?;
    let new_password = use_case.execute(email).await?;

    Ok(Json(PasswordResetResponse {
        password: new_password.as_ref().expose_secret().clone(),
    }))
}
