use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wicket_application::{GetAccountError, LoginError, ResetPasswordError, UpdateAccountError};
use wicket_core::{AccountError, AccountStoreError};

use crate::auth::SessionTokenError;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// HTTP-boundary error for the account routes.
///
/// Status mapping: a get or reset that targets nothing is 404, an update
/// that matched no row is 400 (the update surface treats it as a bad
/// request), validation failures are 400, credential mismatches are 401, and
/// store or token failures are 500.
#[derive(Debug, Error)]
pub enum AccountApiError {
    #[error("Account not found")]
    AccountNotFound,

    #[error("Update matched no account")]
    UpdateMatchedNoAccount,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Incorrect credentials")]
    IncorrectCredentials,

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for AccountApiError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AccountApiError::InvalidInput(_) | AccountApiError::UpdateMatchedNoAccount => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }

            AccountApiError::AccountNotFound => (StatusCode::NOT_FOUND, self.to_string()),

            AccountApiError::IncorrectCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),

            AccountApiError::UnexpectedError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status_code, body).into_response()
    }
}

impl From<AccountError> for AccountApiError {
    fn from(error: AccountError) -> Self {
        AccountApiError::InvalidInput(error.to_string())
    }
}

impl From<GetAccountError> for AccountApiError {
    fn from(error: GetAccountError) -> Self {
        match error {
            GetAccountError::AccountStoreError(AccountStoreError::NotFound) => {
                AccountApiError::AccountNotFound
            }
            GetAccountError::AccountStoreError(e) => {
                AccountApiError::UnexpectedError(e.to_string())
            }
        }
    }
}

impl From<UpdateAccountError> for AccountApiError {
    fn from(error: UpdateAccountError) -> Self {
        match error {
            UpdateAccountError::AccountStoreError(AccountStoreError::NotFound) => {
                AccountApiError::UpdateMatchedNoAccount
            }
            UpdateAccountError::AccountStoreError(e) => {
                AccountApiError::UnexpectedError(e.to_string())
            }
        }
    }
}

impl From<ResetPasswordError> for AccountApiError {
    fn from(error: ResetPasswordError) -> Self {
        match error {
            ResetPasswordError::AccountStoreError(AccountStoreError::NotFound) => {
                AccountApiError::AccountNotFound
            }
            ResetPasswordError::AccountStoreError(e) => {
                AccountApiError::UnexpectedError(e.to_string())
            }
        }
    }
}

impl From<LoginError> for AccountApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::InvalidCredentials => AccountApiError::IncorrectCredentials,
            LoginError::CredentialVerifierError(e) => {
                AccountApiError::UnexpectedError(e.to_string())
            }
        }
    }
}

impl From<SessionTokenError> for AccountApiError {
    fn from(error: SessionTokenError) -> Self {
        AccountApiError::UnexpectedError(error.to_string())
    }
}
