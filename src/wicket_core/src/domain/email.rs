use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::account::AccountError;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_+&*-]+(?:\.[a-zA-Z0-9_+&*-]+)*@(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,7}$")
        .expect("email pattern is valid")
});

/// A syntactically valid email address.
///
/// Validation happens once at the boundary; everything past this type can
/// assume the address is well formed and use it as a lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn parse(email: String) -> Result<Self, AccountError> {
        if EMAIL_RE.is_match(&email) {
            Ok(Self(email))
        } else {
            Err(AccountError::InvalidEmail)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<String> for Email {
    type Error = AccountError;

    fn try_from(email: String) -> Result<Self, Self::Error> {
        Self::parse(email)
    }
}
