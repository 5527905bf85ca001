use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Todo {
    /// All of one user's todos, newest first.
    pub async fn list_by_user(db: &SqlitePool, user_id: i64) -> sqlx::Result<Vec<Todo>> {
        sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, user_id, title, description, completed, created_at
            FROM todos
            WHERE user_id = ?
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
    }

    pub async fn create(
        db: &SqlitePool,
        user_id: i64,
        title: &str,
        description: Option<&str>,
    ) -> sqlx::Result<Todo> {
        sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (user_id, title, description, completed, created_at)
            VALUES (?, ?, ?, 0, ?)
            RETURNING id, user_id, title, description, completed, created_at
            "#,
        )
        .bind(user_id)
        .bind(title)
        .bind(description)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(db)
        .await
    }

    /// Ownership is part of the lookup: another user's todo is simply
    /// absent.
    pub async fn find_owned(db: &SqlitePool, id: i64, user_id: i64) -> sqlx::Result<Option<Todo>> {
        sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, user_id, title, description, completed, created_at
            FROM todos
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await
    }

    pub async fn update(
        db: &SqlitePool,
        id: i64,
        user_id: i64,
        title: &str,
        description: Option<&str>,
        completed: bool,
    ) -> sqlx::Result<Todo> {
        sqlx::query_as::<_, Todo>(
            r#"
            UPDATE todos
            SET title = ?, description = ?, completed = ?
            WHERE id = ? AND user_id = ?
            RETURNING id, user_id, title, description, completed, created_at
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(completed)
        .bind(id)
        .bind(user_id)
        .fetch_one(db)
        .await
    }

    pub async fn delete(db: &SqlitePool, id: i64, user_id: i64) -> sqlx::Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM todos
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected())
    }
}
