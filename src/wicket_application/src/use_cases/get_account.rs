use wicket_core::{Account, AccountId, AccountStore, AccountStoreError};

/// Error types specific to the get-account use case
#[derive(Debug, thiserror::Error)]
pub enum GetAccountError {
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
}

/// Get-account use case - looks a single account up by id
pub struct GetAccountUseCase<S>
where
    S: AccountStore,
{
    account_store: S,
}

impl<S> GetAccountUseCase<S>
where
    S: AccountStore,
{
    pub fn new(account_store: S) -> Self {
        Self { account_store }
    }

    /// Execute the get-account use case
    ///
    /// # Arguments
    /// * `id` - Identifier of the account to fetch
    ///
    /// # Returns
    /// The account, or `NotFound` through `GetAccountError` when no row
    /// matches. Store outages surface as `DataAccess`, never as a miss.
    #[tracing::instrument(name = "GetAccountUseCase::execute", skip(self))]
    pub async fn execute(&self, id: AccountId) -> Result<Account, GetAccountError> {
        let account = self.account_store.find(&id).await?;

        Ok(account)
    }
}
