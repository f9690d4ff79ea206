use crate::error::Result;
use sqlx::PgPool;
use uuid::Uuid;

use super::user_models::User;

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    /// Whole-record upsert. Inserts the user if the id is new, otherwise
    /// overwrites the mutable columns, including the message list.
    pub async fn save(&self, user: &User) -> Result<User> {
        let saved = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, username, password, messages)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (id) DO UPDATE SET
                username = EXCLUDED.username,
                password = EXCLUDED.password,
                messages = EXCLUDED.messages,
                updated_at = NOW()
             RETURNING *",
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.password)
        .bind(&user.messages)
        .fetch_one(&self.pool)
        .await?;

        Ok(saved)
    }
}
