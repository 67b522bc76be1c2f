use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use wicket_core::{Account, AccountId, AccountStore, AccountStoreError, Email, NewAccount, Password};

/// In-memory [`AccountStore`] used by tests and local runs.
///
/// Mirrors the relational store's semantics: ids are assigned at insert,
/// `reset_password` touches every account carrying the email (addresses are
/// not unique) and fails when none does. Passwords stay as value objects
/// since nothing reads them back out.
#[derive(Default, Clone)]
pub struct InMemoryAccountStore {
    accounts: Arc<RwLock<HashMap<AccountId, StoredAccount>>>,
}

struct StoredAccount {
    account: Account,
    password: Password,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn create(&self, account: NewAccount) -> Result<AccountId, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        let id = AccountId::new();
        if accounts.contains_key(&id) {
            return Err(AccountStoreError::DuplicateId);
        }

        let (data, email, password) = account.into_parts();
        accounts.insert(
            id.clone(),
            StoredAccount {
                account: Account::new(id.clone(), data, email),
                password,
            },
        );

        Ok(id)
    }

    async fn find(&self, id: &AccountId) -> Result<Account, AccountStoreError> {
        let accounts = self.accounts.read().await;
        accounts
            .get(id)
            .map(|stored| stored.account.clone())
            .ok_or(AccountStoreError::NotFound)
    }

    async fn update_data(&self, id: &AccountId, data: &str) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        let stored = accounts.get_mut(id).ok_or(AccountStoreError::NotFound)?;

        stored.account = Account::new(
            id.clone(),
            data.to_string(),
            stored.account.email().clone(),
        );
        Ok(())
    }

    async fn reset_password(
        &self,
        email: &Email,
        new_password: Password,
    ) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        let mut changed = 0;
        for stored in accounts
            .values_mut()
            .filter(|stored| stored.account.email() == email)
        {
            stored.password = new_password.clone();
            changed += 1;
        }

        if changed == 0 {
            return Err(AccountStoreError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: &AccountId) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        accounts.remove(id).ok_or(AccountStoreError::NotFound)?;
        Ok(())
    }
}
