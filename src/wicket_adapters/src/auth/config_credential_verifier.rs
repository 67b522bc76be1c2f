use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use wicket_core::{CredentialVerifier, CredentialVerifierError};

use crate::config::LoginSettings;

/// [`CredentialVerifier`] backed by credentials from configuration.
///
/// Replaces any notion of compiled-in credentials: the expected pair is
/// injected at startup (settings file or environment) and compared verbatim.
#[derive(Clone)]
pub struct ConfigCredentialVerifier {
    username: String,
    password: Secret<String>,
}

impl ConfigCredentialVerifier {
    pub fn new(username: String, password: Secret<String>) -> Self {
        Self { username, password }
    }

    pub fn from_settings(settings: &LoginSettings) -> Self {
        Self::new(settings.username.clone(), settings.password.clone())
    }
}

#[async_trait]
impl CredentialVerifier for ConfigCredentialVerifier {
    #[tracing::instrument(name = "Verifying login credentials", skip_all)]
    async fn verify(
        &self,
        username: &str,
        password: &Secret<String>,
    ) -> Result<bool, CredentialVerifierError> {
        Ok(username == self.username
            && password.expose_secret() == self.password.expose_secret())
    }
}
