use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    account::{Account, NewAccount},
    account_id::AccountId,
    email::Email,
    password::Password,
};

// AccountStore port trait and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    /// No row matched the id/email the operation targeted.
    #[error("Account not found")]
    NotFound,
    /// Insert collided with an existing id (constraint violation).
    #[error("Account already exists")]
    DuplicateId,
    /// The store itself failed: unreachable, query error, bad row.
    #[error("Data access error: {0}")]
    DataAccess(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::NotFound, Self::NotFound) => true,
            (Self::DuplicateId, Self::DuplicateId) => true,
            (Self::DataAccess(_), Self::DataAccess(_)) => true,
            _ => false,
        }
    }
}

/// Data-access boundary between the service layer and the relational store.
///
/// Contract highlights:
/// - `create` assigns and returns a fresh unique id; email is not unique.
/// - the mutating operations succeed iff at least one row changed and report
///   `NotFound` otherwise.
/// - failures of the store surface as `DataAccess`, never as a disguised
///   `NotFound`.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn create(&self, account: NewAccount) -> Result<AccountId, AccountStoreError>;
    async fn find(&self, id: &AccountId) -> Result<Account, AccountStoreError>;
    async fn update_data(&self, id: &AccountId, data: &str) -> Result<(), AccountStoreError>;
    async fn reset_password(
        &self,
        email: &Email,
        new_password: Password,
    ) -> Result<(), AccountStoreError>;
    async fn delete(&self, id: &AccountId) -> Result<(), AccountStoreError>;
}
