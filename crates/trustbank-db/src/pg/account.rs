//! PostgreSQL account repository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::AccountRow;
use crate::repo::{AccountRepository, CreateAccount};

/// PostgreSQL account repository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    /// Create a new account repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> DbResult<Option<AccountRow>> {
        let account = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, user_id, account_number, tier, balance_cents, created_at
            FROM accounts
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn create(&self, account: CreateAccount) -> DbResult<AccountRow> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            INSERT INTO accounts (id, user_id, account_number, tier, balance_cents)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, account_number, tier, balance_cents, created_at
            "#,
        )
        .bind(account.id)
        .bind(account.user_id)
        .bind(&account.account_number)
        .bind(&account.tier)
        .bind(account.balance_cents)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}
