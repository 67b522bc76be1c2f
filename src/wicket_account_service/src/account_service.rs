use axum::{
    Router,
    http::{HeaderValue, Method, request},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use wicket_adapters::{
    auth::SessionTokenConfig,
    config::AllowedOrigins,
    http::routes::{get_account, login, reset_password, update_account},
};
use wicket_core::{AccountStore, CredentialVerifier};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// Main account service that provides all account-related routes
pub struct AccountService {
    router: Router,
}

impl AccountService {
    /// Create a new AccountService with the provided store and verifier
    ///
    /// # Arguments
    /// * `account_store` - Store for account data (must be Clone)
    /// * `credential_verifier` - Credential check behind login (must be Clone)
    /// * `token_config` - Signing secret and TTL for session tokens
    ///
    /// # Note on Architecture
    /// Stores implement Clone via an internal pool or Arc for thread-safe
    /// sharing. Each route is given its specific state requirements.
    pub fn new<S, V>(account_store: S, credential_verifier: V, token_config: SessionTokenConfig) -> Self
    where
        S: AccountStore + Clone + 'static,
        V: CredentialVerifier + Clone + 'static,
    {
        let router = Router::new()
            // Account lookup, update and password reset only need the store
            .route(
                "/account/{id}",
                get(get_account::<S>).put(update_account::<S>),
            )
            .route("/account/password-reset", post(reset_password::<S>))
            .with_state(account_store)
            // Login needs the verifier and the token signing config
            .route("/login", post(login::<V>))
            .with_state((credential_verifier, token_config));

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the AccountService into a nested router that can be mounted on
    /// another router
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    ///
    /// # Returns
    /// An Axum Router that can be nested into another application
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PUT])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the account service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    /// * `allowed_origins` - Optional list of allowed CORS origins
    ///
    /// # Returns
    /// Result indicating success or error
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Account service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
