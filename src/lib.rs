//! # Wicket - Account Service Library
//!
//! This is a facade crate that re-exports all public APIs from the account
//! service components. Use this crate to get access to the full account
//! management functionality in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! wicket = { path = "../wicket" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Account`, `Email`, `Password`, etc.
//! - **Repository traits**: `AccountStore`
//! - **Use cases**: `GetAccountUseCase`, `LoginUseCase`, etc.
//! - **Adapters**: `PostgresAccountStore`, `InMemoryAccountStore`, `ConfigCredentialVerifier`, etc.
//! - **Service**: `AccountService` - The main entry point for the account service

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use wicket_core::*;
}

// Re-export most commonly used core types at the root level
pub use wicket_core::{Account, AccountError, AccountId, Email, NewAccount, Password, Username};

// ============================================================================
// Repository Traits (Ports)
// ============================================================================

/// Repository trait definitions
pub mod repositories {
    pub use wicket_core::{AccountStore, AccountStoreError};
}

// Re-export repository traits at root level
pub use wicket_core::{
    AccountStore, AccountStoreError, CredentialVerifier, CredentialVerifierError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use wicket_application::*;
}

// Re-export use cases at root level
pub use wicket_application::{
    GetAccountUseCase, LoginUseCase, ResetPasswordUseCase, UpdateAccountUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use wicket_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use wicket_adapters::persistence::*;
    }

    /// Credential checking and session tokens
    pub mod auth {
        pub use wicket_adapters::auth::*;
    }

    /// Calculation cache
    pub mod cache {
        pub use wicket_adapters::cache::*;
    }

    /// Configuration
    pub mod config {
        pub use wicket_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use wicket_adapters::{
    auth::ConfigCredentialVerifier,
    cache::CalcCache,
    config::Settings,
    persistence::{InMemoryAccountStore, PostgresAccountStore},
};

// ============================================================================
// Account Service (Main Entry Point)
// ============================================================================

/// Main account service
pub use wicket_account_service::AccountService;

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing repository traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

/// Re-export axum for embedding the service router in a larger application
pub use axum;
