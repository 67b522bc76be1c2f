use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialVerifierError {
    #[error("Credential backend error: {0}")]
    Backend(String),
}

/// Pluggable credential check behind the login operation.
///
/// Implementations decide where the reference credentials live (injected
/// configuration, a directory, a store). The inputs arrive raw and
/// unvalidated: an empty or malformed submission must come back as
/// `Ok(false)`, the same answer as any other mismatch.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(
        &self,
        username: &str,
        password: &Secret<String>,
    ) -> Result<bool, CredentialVerifierError>;
}
