mod account_service;
mod helpers;
mod tracing;

pub use account_service::AccountService;
pub use helpers::{configure_postgresql, get_postgres_pool};

// Re-export commonly used types
pub use wicket_core::{Account, AccountId, AccountStore, CredentialVerifier, Email};
