use argon2::{Argon2, PasswordHash, PasswordVerifier};
use secrecy::{ExposeSecret, Secret};
use wicket_account_service::get_postgres_pool;
use wicket_adapters::persistence::PostgresAccountStore;
use wicket_core::{AccountStore, AccountStoreError, Email, NewAccount, Password};

fn database_url() -> String {
    std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for the Postgres tests")
}

#[tokio::test]
#[ignore = "needs a running PostgreSQL instance (set DATABASE_URL)"]
async fn postgres_store_round_trip() {
    let pool = get_postgres_pool(&database_url())
        .await
        .expect("Failed to connect to Postgres");
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run migrations");
    let store = PostgresAccountStore::new(pool.clone());

    // unique address per run; the table survives between runs
    let email = Email::parse(format!("{}@example.com", uuid::Uuid::new_v4().simple())).unwrap();

    let id = store
        .create(NewAccount::new(
            "initial".to_string(),
            email.clone(),
            Password::parse(Secret::from("password123".to_string())).unwrap(),
        ))
        .await
        .unwrap();

    let account = store.find(&id).await.unwrap();
    assert_eq!(account.id(), &id);
    assert_eq!(account.data(), "initial");
    assert_eq!(account.email(), &email);

    store.update_data(&id, "updated").await.unwrap();
    assert_eq!(store.find(&id).await.unwrap().data(), "updated");

    let new_password = Password::generate();
    store
        .reset_password(&email, new_password.clone())
        .await
        .unwrap();

    // the stored credential is an argon2 hash of the generated password
    let (hash,): (String,) = sqlx::query_as("SELECT password_hash FROM accounts WHERE id = $1")
        .bind(id.as_str())
        .fetch_one(&pool)
        .await
        .unwrap();
    let parsed = PasswordHash::new(&hash).unwrap();
    assert!(
        Argon2::default()
            .verify_password(new_password.as_ref().expose_secret().as_bytes(), &parsed)
            .is_ok()
    );

    store.delete(&id).await.unwrap();
    assert_eq!(store.find(&id).await.unwrap_err(), AccountStoreError::NotFound);
}

#[tokio::test]
#[ignore = "needs a running PostgreSQL instance (set DATABASE_URL)"]
async fn postgres_store_misses_cleanly() {
    let pool = get_postgres_pool(&database_url())
        .await
        .expect("Failed to connect to Postgres");
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run migrations");
    let store = PostgresAccountStore::new(pool);

    let ghost = wicket_core::AccountId::new();

    assert_eq!(
        store.find(&ghost).await.unwrap_err(),
        AccountStoreError::NotFound
    );
    assert_eq!(
        store.update_data(&ghost, "data").await.unwrap_err(),
        AccountStoreError::NotFound
    );
    assert_eq!(
        store
            .reset_password(
                &Email::parse("void@example.com".to_string()).unwrap(),
                Password::generate(),
            )
            .await
            .unwrap_err(),
        AccountStoreError::NotFound
    );
}
