pub mod domain;
pub mod ports;
pub mod strategies;

// Re-export commonly used types for convenience
pub use domain::{
    account::{Account, AccountError, NewAccount},
    account_id::AccountId,
    email::Email,
    password::Password,
    username::Username,
};

pub use ports::repositories::{AccountStore, AccountStoreError};

pub use strategies::credential_verifier::{CredentialVerifier, CredentialVerifierError};
