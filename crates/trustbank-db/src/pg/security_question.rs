//! PostgreSQL security question repository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::SecurityQuestionRow;
use crate::repo::{CreateSecurityQuestion, SecurityQuestionRepository};

/// PostgreSQL security question repository
#[derive(Clone)]
pub struct PgSecurityQuestionRepository {
    pool: PgPool,
}

impl PgSecurityQuestionRepository {
    /// Create a new security question repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SecurityQuestionRepository for PgSecurityQuestionRepository {
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<SecurityQuestionRow>> {
        let question = sqlx::query_as::<_, SecurityQuestionRow>(
            r#"
            SELECT id, question, answer, created_at
            FROM security_questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    async fn create(&self, question: CreateSecurityQuestion) -> DbResult<SecurityQuestionRow> {
        let row = sqlx::query_as::<_, SecurityQuestionRow>(
            r#"
            INSERT INTO security_questions (id, question, answer)
            VALUES ($1, $2, $3)
            RETURNING id, question, answer, created_at
            "#,
        )
        .bind(question.id)
        .bind(&question.question)
        .bind(&question.answer)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}
