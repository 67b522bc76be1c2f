use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use wicket_application::UpdateAccountUseCase;
use wicket_core::{AccountId, AccountStore};

use super::error::AccountApiError;

#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    pub data: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateAccountResponse {
    pub id: String,
    pub data: String,
}

#[tracing::instrument(name = "Update account", skip(account_store, request))]
pub async fn update_account<S>(
    State(account_store): State<S>,
    Path(id): Path<String>,
    Json(request): Json<UpdateAccountRequest>,
) -> Result<impl IntoResponse, AccountApiError>
where
    S: AccountStore + Clone + 'static,
{
    let use_case = UpdateAccountUseCase::new(account_store);

    let id = AccountId::parse(id)?;
    use_case.execute(id.clone(), request.data.clone()).await?;

    Ok(Json(UpdateAccountResponse {
        id: id.as_str().to_owned(),
        data: request.data,
    }))
}
