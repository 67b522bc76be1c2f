use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use wicket_account_service::{AccountService, configure_postgresql};
use wicket_adapters::{
    auth::ConfigCredentialVerifier, config::Settings, persistence::PostgresAccountStore,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    color_eyre::install().expect("Failed to install color_eyre");
    init_tracing().expect("Failed to initialize tracing");

    // Load configuration
    dotenvy::dotenv().ok();
    let settings = Settings::load();

    // Setup database connection pool and run migrations
    let pg_pool = configure_postgresql(&settings).await;

    // Create the store, the credential verifier and the token config
    let account_store = PostgresAccountStore::new(pg_pool);
    let credential_verifier = ConfigCredentialVerifier::from_settings(&settings.login);
    let token_config = settings.session.token_config();

    let account_service = AccountService::new(account_store, credential_verifier, token_config);

    // Run as standalone server
    let listener = tokio::net::TcpListener::bind(settings.application.address()).await?;
    tracing::info!("Starting account service...");

    account_service
        .run_standalone(listener, settings.allowed_origins.clone())
        .await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
