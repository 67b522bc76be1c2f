use rand::{Rng, distr::Alphanumeric};
use secrecy::{ExposeSecret, Secret};

use crate::domain::account::AccountError;

/// Minimum length is strictly greater than this.
const MIN_LENGTH: usize = 5;

/// Length of generated replacement passwords.
const GENERATED_LENGTH: usize = 16;

/// A password that satisfies the length policy.
///
/// The inner value stays wrapped in [`Secret`] so it never shows up in debug
/// output or logs; stores decide how to persist it (the relational store
/// hashes, the in-memory store keeps the value object).
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn parse(password: Secret<String>) -> Result<Self, AccountError> {
        if password.expose_secret().len() > MIN_LENGTH {
            Ok(Self(password))
        } else {
            Err(AccountError::InvalidPassword)
        }
    }

    /// Generate a random alphanumeric replacement password.
    ///
    /// Used by the password-reset flow; the caller gets the plaintext exactly
    /// once, the stores only ever see it on the way to persistence.
    pub fn generate() -> Self {
        let value: String = rand::rng()
            .sample_iter(Alphanumeric)
            .take(GENERATED_LENGTH)
            .map(char::from)
            .collect();
        Self(Secret::from(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = AccountError;

    fn try_from(password: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(password)
    }
}
