use axum::http::HeaderValue;
use config::{Config, ConfigError, Environment, File};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::auth::SessionTokenConfig;
use crate::config::constants::{DEFAULT_CONFIG_FILE, env};

/// Service settings, layered from an optional JSON file and the environment.
///
/// Nothing here has a compiled-in secret: database URL, login credentials,
/// and the token secret all have to be injected. `load` panics on a missing
/// or invalid configuration since the service cannot start without one.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub postgres: PostgresSettings,
    pub login: LoginSettings,
    pub session: SessionSettings,
    #[serde(default)]
    pub allowed_origins: Option<AllowedOrigins>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
}

/// The one username/password pair the login operation accepts.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginSettings {
    pub username: String,
    pub password: Secret<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    pub secret: Secret<String>,
    pub time_to_live_in_seconds: i64,
}

impl SessionSettings {
    pub fn token_config(&self) -> SessionTokenConfig {
        SessionTokenConfig {
            secret: self.secret.clone(),
            time_to_live_in_seconds: self.time_to_live_in_seconds,
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        Self::try_load().expect("Failed to load configuration")
    }

    /// Layering order: defaults, then the settings file, then
    /// `ACCOUNT_SERVICE__*` environment entries, then the dedicated
    /// environment variables from [`constants::env`].
    ///
    /// [`constants::env`]: crate::config::constants::env
    pub fn try_load() -> Result<Self, ConfigError> {
        let config_file = std::env::var(env::CONFIG_FILE_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        let mut settings: Settings = Config::builder()
            .set_default("application.host", "0.0.0.0")?
            .set_default("application.port", 3000_i64)?
            .set_default("session.time_to_live_in_seconds", 600_i64)?
            .add_source(File::with_name(&config_file).required(false))
            .add_source(
                Environment::with_prefix("ACCOUNT_SERVICE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("postgres.url", std::env::var(env::DATABASE_URL_ENV_VAR).ok())?
            .set_override_option(
                "session.secret",
                std::env::var(env::SESSION_SECRET_ENV_VAR).ok(),
            )?
            .set_override_option(
                "login.username",
                std::env::var(env::LOGIN_USERNAME_ENV_VAR).ok(),
            )?
            .set_override_option(
                "login.password",
                std::env::var(env::LOGIN_PASSWORD_ENV_VAR).ok(),
            )?
            .build()?
            .try_deserialize()?;

        if let Ok(origins) = std::env::var(env::ALLOWED_ORIGINS_ENV_VAR) {
            settings.allowed_origins = Some(AllowedOrigins::from_comma_separated(&origins));
        }

        settings.validate()?;

        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.login.username.is_empty() || self.login.password.expose_secret().is_empty() {
            return Err(ConfigError::Message(
                "login credentials must not be empty".to_string(),
            ));
        }
        if self.session.secret.expose_secret().is_empty() {
            return Err(ConfigError::Message(
                "session secret must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// CORS origin allow-list.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn from_comma_separated(origins: &str) -> Self {
        Self(
            origins
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
        )
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .map(|origin| self.0.iter().any(|allowed| allowed == origin))
            .unwrap_or(false)
    }
}
