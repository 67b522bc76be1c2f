use secrecy::Secret;
use wicket_account_service::AccountService;
use wicket_adapters::{
    auth::{ConfigCredentialVerifier, SessionTokenConfig},
    config::test,
    persistence::InMemoryAccountStore,
};
use wicket_core::{AccountId, AccountStore, Email, NewAccount, Password};

pub const TEST_USERNAME: &str = "admin";
pub const TEST_PASSWORD: &str = "correct horse battery";
pub const TEST_TOKEN_SECRET: &str = "test token secret";

/// A running account service on an ephemeral port, backed by the in-memory
/// store so every test starts from an empty database.
pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub account_store: InMemoryAccountStore,
    pub token_config: SessionTokenConfig,
}

impl TestApp {
    pub async fn new() -> Self {
        let account_store = InMemoryAccountStore::new();
        let credential_verifier = ConfigCredentialVerifier::new(
            TEST_USERNAME.to_string(),
            Secret::from(TEST_PASSWORD.to_string()),
        );
        let token_config = SessionTokenConfig {
            secret: Secret::from(TEST_TOKEN_SECRET.to_string()),
            time_to_live_in_seconds: 600,
        };

        let service = AccountService::new(
            account_store.clone(),
            credential_verifier,
            token_config.clone(),
        );

        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(service.run_standalone(listener, None));

        Self {
            address,
            http_client: reqwest::Client::new(),
            account_store,
            token_config,
        }
    }

    /// Insert an account directly through the store, bypassing HTTP (the
    /// surface has no create operation).
    pub async fn seed_account(&self, data: &str, email: &str) -> AccountId {
        let account = NewAccount::new(
            data.to_string(),
            Email::parse(email.to_string()).unwrap(),
            Password::parse(Secret::from("password123".to_string())).unwrap(),
        );

        self.account_store
            .create(account)
            .await
            .expect("Failed to seed account")
    }

    pub async fn get_account(&self, id: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}/account/{}", self.address, id))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn put_account<Body>(&self, id: &str, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .put(format!("{}/account/{}", self.address, id))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_password_reset<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/account/password-reset", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_login<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/login", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
