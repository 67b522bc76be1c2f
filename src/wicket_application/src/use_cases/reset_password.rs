use wicket_core::{AccountStore, AccountStoreError, Email, Password};

/// Error types specific to the reset-password use case
#[derive(Debug, thiserror::Error)]
pub enum ResetPasswordError {
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
}

/// Reset-password use case - replaces the password of the account behind an
/// email address with a freshly generated one
pub struct ResetPasswordUseCase<S>
where
    S: AccountStore,
{
    account_store: S,
}

impl<S> ResetPasswordUseCase<S>
where
    S: AccountStore,
{
    pub fn new(account_store: S) -> Self {
        Self { account_store }
    }

    /// Execute the reset-password use case
    ///
    /// # Arguments
    /// * `email` - Address identifying the account to reset
    ///
    /// # Returns
    /// The generated replacement password on success. `NotFound` through
    /// `ResetPasswordError` means the address matched no account, so the
    /// caller can distinguish an unknown address from a store outage.
    #[tracing::instrument(name = "ResetPasswordUseCase::execute", skip(self))]
    pub async fn execute(&self, email: Email) -> Result<Password, ResetPasswordError> {
        let new_password = Password::generate();

        self.account_store
            .reset_password(&email, new_password.clone())
            .await?;

        Ok(new_password)
    }
}
