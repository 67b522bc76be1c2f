pub mod env {
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const SESSION_SECRET_ENV_VAR: &str = "SESSION_SECRET";
    pub const LOGIN_USERNAME_ENV_VAR: &str = "LOGIN_USERNAME";
    pub const LOGIN_PASSWORD_ENV_VAR: &str = "LOGIN_PASSWORD";
    pub const ALLOWED_ORIGINS_ENV_VAR: &str = "ACCOUNT_SERVICE_ALLOWED_ORIGINS";
    pub const CONFIG_FILE_ENV_VAR: &str = "ACCOUNT_SERVICE_CONFIG";
}

/// Base name of the optional settings file (`account-service.json`).
pub const DEFAULT_CONFIG_FILE: &str = "account-service";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
