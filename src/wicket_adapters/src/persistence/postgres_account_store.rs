use secrecy::ExposeSecret;
use sqlx::{Pool, Postgres};

use wicket_core::{Account, AccountId, AccountStore, AccountStoreError, Email, NewAccount, Password};

use crate::auth::password_hash::compute_password_hash;

#[derive(Clone)]
pub struct PostgresAccountStore {
    pool: sqlx::PgPool,
}

impl PostgresAccountStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresAccountStore { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AccountRow {
    id: String,
    data: String,
    email: String,
}

impl TryFrom<AccountRow> for Account {
    type Error = AccountStoreError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let id = AccountId::parse(row.id)
            .map_err(|e| AccountStoreError::DataAccess(e.to_string()))?;
        let email =
            Email::parse(row.email).map_err(|e| AccountStoreError::DataAccess(e.to_string()))?;

        Ok(Account::new(id, row.data, email))
    }
}

#[async_trait::async_trait]
impl AccountStore for PostgresAccountStore {
    #[tracing::instrument(name = "Adding account to PostgreSQL", skip_all)]
    async fn create(&self, account: NewAccount) -> Result<AccountId, AccountStoreError> {
        let (data, email, password) = account.into_parts();

        let password_hash = compute_password_hash(password)
            .await
            .map_err(AccountStoreError::DataAccess)?;

        let id = AccountId::new();

        sqlx::query(
            r#"
                INSERT INTO accounts (id, data, email, password_hash)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(id.as_str())
        .bind(&data)
        .bind(email.as_str())
        .bind(password_hash.expose_secret())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.constraint().is_some() {
                    return AccountStoreError::DuplicateId;
                }
            }
            AccountStoreError::DataAccess(e.to_string())
        })?;

        Ok(id)
    }

    #[tracing::instrument(name = "Retrieving account from PostgreSQL", skip_all)]
    async fn find(&self, id: &AccountId) -> Result<Account, AccountStoreError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
                SELECT id, data, email
                FROM accounts
                WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountStoreError::DataAccess(e.to_string()))?;

        let Some(row) = row else {
            return Err(AccountStoreError::NotFound);
        };

        Account::try_from(row)
    }

    #[tracing::instrument(name = "Updating account data in PostgreSQL", skip_all)]
    async fn update_data(&self, id: &AccountId, data: &str) -> Result<(), AccountStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE accounts
                SET data = $1
                WHERE id = $2
            "#,
        )
        .bind(data)
        .bind(id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| AccountStoreError::DataAccess(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AccountStoreError::NotFound);
        }

        Ok(())
    }

    #[tracing::instrument(name = "Resetting password in PostgreSQL", skip_all)]
    async fn reset_password(
        &self,
        email: &Email,
        new_password: Password,
    ) -> Result<(), AccountStoreError> {
        let password_hash = compute_password_hash(new_password)
            .await
            .map_err(AccountStoreError::DataAccess)?;

        // email is not unique, so this may rewrite several rows
        let result = sqlx::query(
            r#"
                UPDATE accounts
                SET password_hash = $1
                WHERE email = $2
            "#,
        )
        .bind(password_hash.expose_secret())
        .bind(email.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| AccountStoreError::DataAccess(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AccountStoreError::NotFound);
        }

        Ok(())
    }

    #[tracing::instrument(name = "Deleting account from PostgreSQL", skip_all)]
    async fn delete(&self, id: &AccountId) -> Result<(), AccountStoreError> {
        let result = sqlx::query(
            r#"
                DELETE FROM accounts
                WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| AccountStoreError::DataAccess(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AccountStoreError::NotFound);
        }

        Ok(())
    }
}
