//! PostgreSQL session token repository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::SessionTokenRow;
use crate::repo::{CreateSessionToken, SessionTokenRepository};

/// PostgreSQL session token repository
#[derive(Clone)]
pub struct PgSessionTokenRepository {
    pool: PgPool,
}

impl PgSessionTokenRepository {
    /// Create a new session token repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionTokenRepository for PgSessionTokenRepository {
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<SessionTokenRow>> {
        let token = sqlx::query_as::<_, SessionTokenRow>(
            r#"
            SELECT id, user_id, token, revoked, expired, created_at
            FROM session_tokens
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(token)
    }

    async fn find_all_by_user(&self, user_id: Uuid) -> DbResult<Vec<SessionTokenRow>> {
        let tokens = sqlx::query_as::<_, SessionTokenRow>(
            r#"
            SELECT id, user_id, token, revoked, expired, created_at
            FROM session_tokens
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tokens)
    }

    async fn save(&self, token: CreateSessionToken) -> DbResult<SessionTokenRow> {
        let row = sqlx::query_as::<_, SessionTokenRow>(
            r#"
            INSERT INTO session_tokens (id, user_id, token)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, token, revoked, expired, created_at
            "#,
        )
        .bind(token.id)
        .bind(token.user_id)
        .bind(&token.token)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn revoke_all_for_user(&self, user_id: Uuid) -> DbResult<u64> {
        let result = sqlx::query(
            "UPDATE session_tokens SET revoked = TRUE, expired = TRUE WHERE user_id = $1",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
