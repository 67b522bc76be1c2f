use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;
use wicket_adapters::config::Settings;

/// Configure and return a PostgreSQL connection pool
///
/// This function takes the database URL from the loaded settings, creates a
/// connection pool, and runs all pending migrations.
///
/// # Returns
/// A configured PgPool ready for use
///
/// # Panics
/// Panics if unable to create the pool or run migrations
pub async fn configure_postgresql(settings: &Settings) -> PgPool {
    let db_url = settings.postgres.url.expose_secret();

    let pg_pool = get_postgres_pool(db_url)
        .await
        .expect("Failed to create Postgres connection pool");

    // Run database migrations
    sqlx::migrate!()
        .run(&pg_pool)
        .await
        .expect("Failed to run migrations");

    pg_pool
}

/// Create a PostgreSQL connection pool
///
/// The pool is bounded and gives up on acquiring a connection after a few
/// seconds instead of queueing callers indefinitely.
///
/// # Arguments
/// * `url` - Database connection URL
///
/// # Returns
/// Result containing the PgPool or an error
pub async fn get_postgres_pool(url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(3))
        .connect(url)
        .await
}
