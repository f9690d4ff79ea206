use crate::error::Result;
use sqlx::PgPool;
use uuid::Uuid;

use super::message_models::Message;

#[derive(Clone)]
pub struct MessageRepository {
    pool: PgPool,
}

impl MessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All messages in insertion order.
    pub async fn find_all(&self) -> Result<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>("SELECT * FROM messages ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;

        Ok(messages)
    }

    pub async fn find_by_id(&self, message_id: Uuid) -> Result<Option<Message>> {
        let message = sqlx::query_as::<_, Message>("SELECT * FROM messages WHERE id = $1")
            .bind(message_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(message)
    }

    pub async fn create(&self, title: &str, body: &str, author: Uuid) -> Result<Message> {
        let message = sqlx::query_as::<_, Message>(
            "INSERT INTO messages (title, body, author)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(title)
        .bind(body)
        .bind(author)
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }

    /// Partial update: absent fields keep their stored value. A no-op when
    /// the id matches nothing.
    pub async fn update(
        &self,
        message_id: Uuid,
        title: Option<&str>,
        body: Option<&str>,
        author: Option<Uuid>,
    ) -> Result<()> {
        sqlx::query(
            "UPDATE messages
             SET title = COALESCE($2, title),
                 body = COALESCE($3, body),
                 author = COALESCE($4, author),
                 updated_at = NOW()
             WHERE id = $1",
        )
        .bind(message_id)
        .bind(title)
        .bind(body)
        .bind(author)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, message_id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(message_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
