use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use wicket_application::GetAccountUseCase;
use wicket_core::{Account, AccountId, AccountStore};

use super::error::AccountApiError;

#[derive(Debug, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: String,
    pub data: String,
    pub email: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id().as_str().to_owned(),
            data: account.data().to_owned(),
            email: account.email().as_str().to_owned(),
        }
    }
}

#[tracing::instrument(name = "Get account", skip(account_store))]
pub async fn get_account<S>(
    State(account_store): State<S>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AccountApiError>
where
    S: AccountStore + Clone + 'static,
{
    let use_case = GetAccountUseCase::new(account_store);

    let id = AccountId::parse(id)?;
    let account = use_case.execute(id).await?;

    Ok(Json(AccountResponse::from(account)))
}
