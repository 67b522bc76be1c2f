use std::fmt;

use crate::domain::account::AccountError;

/// A non-empty login name.
///
/// Only constructed after a successful credential check. Raw login input
/// goes to the verifier untouched, where an empty submission fails
/// authentication rather than validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn parse(username: String) -> Result<Self, AccountError> {
        if username.is_empty() {
            return Err(AccountError::InvalidUsername);
        }
        Ok(Self(username))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<String> for Username {
    type Error = AccountError;

    fn try_from(username: String) -> Result<Self, Self::Error> {
        Self::parse(username)
    }
}
