use wicket_core::{AccountId, AccountStore, AccountStoreError};

/// Error types specific to the update-account use case
#[derive(Debug, thiserror::Error)]
pub enum UpdateAccountError {
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
}

/// Update-account use case - overwrites the data field of an existing account
pub struct UpdateAccountUseCase<S>
where
    S: AccountStore,
{
    account_store: S,
}

impl<S> UpdateAccountUseCase<S>
where
    S: AccountStore,
{
    pub fn new(account_store: S) -> Self {
        Self { account_store }
    }

    /// Execute the update-account use case
    ///
    /// # Arguments
    /// * `id` - Identifier of the account to update
    /// * `data` - Replacement value for the account's data field
    ///
    /// # Returns
    /// `Ok(())` when a row was changed, `NotFound` through
    /// `UpdateAccountError` when the id matched nothing.
    #[tracing::instrument(name = "UpdateAccountUseCase::execute", skip(self, data))]
    pub async fn execute(&self, id: AccountId, data: String) -> Result<(), UpdateAccountError> {
        self.account_store.update_data(&id, &data).await?;

        Ok(())
    }
}
