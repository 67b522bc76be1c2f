use thiserror::Error;

use crate::domain::{account_id::AccountId, email::Email, password::Password};

/// Validation errors for account fields.
///
/// Every domain value object parses through one of these variants; the HTTP
/// layer maps them to 400 responses.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Account id must not be empty")]
    InvalidAccountId,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Password must be longer than 5 characters")]
    InvalidPassword,
    #[error("Username must not be empty")]
    InvalidUsername,
}

/// A stored account as read back from an [`AccountStore`].
///
/// The password never travels with the account; stores keep it separately
/// (hashed, for the relational store) and only rewrite it through
/// `reset_password`.
///
/// [`AccountStore`]: crate::ports::repositories::AccountStore
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    data: String,
    email: Email,
}

impl Account {
    pub fn new(id: AccountId, data: String, email: Email) -> Self {
        Self { id, data, email }
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn email(&self) -> &Email {
        &self.email
    }
}

/// The fields needed to insert an account; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewAccount {
    data: String,
    email: Email,
    password: Password,
}

impl NewAccount {
    pub fn new(data: String, email: Email, password: Password) -> Self {
        Self {
            data,
            email,
            password,
        }
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    /// Consume the value, handing the fields to a store for insertion.
    pub fn into_parts(self) -> (String, Email, Password) {
        (self.data, self.email, self.password)
    }
}
