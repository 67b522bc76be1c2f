use std::fmt;

use crate::domain::account::AccountError;

/// Opaque account identifier, unique within a store.
///
/// Stores assign fresh ids at insert time via [`AccountId::new`]. Ids
/// arriving from the outside (request paths) go through
/// [`AccountId::parse`], which rejects only the empty string; the format is
/// otherwise opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountId(String);

impl AccountId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn parse(id: String) -> Result<Self, AccountError> {
        if id.is_empty() {
            return Err(AccountError::InvalidAccountId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<String> for AccountId {
    type Error = AccountError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::parse(id)
    }
}
