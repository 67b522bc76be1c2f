use secrecy::Secret;
use wicket_core::{CredentialVerifier, CredentialVerifierError, Username};

/// Error types specific to the login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Credential verifier error: {0}")]
    CredentialVerifierError(#[from] CredentialVerifierError),
}

/// Login use case - checks a username/password pair against the configured
/// credentials
pub struct LoginUseCase<V>
where
    V: CredentialVerifier,
{
    credential_verifier: V,
}

impl<V> LoginUseCase<V>
where
    V: CredentialVerifier,
{
    pub fn new(credential_verifier: V) -> Self {
        Self { credential_verifier }
    }

    /// Execute the login use case
    ///
    /// # Arguments
    /// * `username` - Submitted username, taken as-is
    /// * `password` - Submitted password, taken as-is
    ///
    /// # Returns
    /// The authenticated [`Username`] on a match. The inputs are not
    /// validated up front; empty or malformed credentials fail the
    /// comparison and come back as `InvalidCredentials`.
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        username: String,
        password: Secret<String>,
    ) -> Result<Username, LoginError> {
        let verified = self
            .credential_verifier
            .verify(&username, &password)
            .await?;

        if !verified {
            return Err(LoginError::InvalidCredentials);
        }

        Username::parse(username).map_err(|_| LoginError::InvalidCredentials)
    }
}
