pub mod config_credential_verifier;
pub mod password_hash;
pub mod session_token;

pub use config_credential_verifier::ConfigCredentialVerifier;
pub use password_hash::compute_password_hash;
pub use session_token::{
    Claims, SessionTokenConfig, SessionTokenError, generate_session_token, validate_session_token,
};
