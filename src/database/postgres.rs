use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};

use super::manager::DatabaseError;
use super::models::{ItemId, TodoItem, User, UserId};
use super::store::{item_not_found, Store};

/// Tables are created on startup if missing; existing data is left untouched.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id BIGSERIAL PRIMARY KEY,
        username VARCHAR(80) NOT NULL UNIQUE,
        password_hash VARCHAR(255) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS todo_items (
        id BIGSERIAL PRIMARY KEY,
        user_id BIGINT NOT NULL REFERENCES users(id),
        content VARCHAR(255) NOT NULL,
        done BOOLEAN NOT NULL DEFAULT FALSE
    )
    "#,
    "CREATE INDEX IF NOT EXISTS todo_items_user_id_idx ON todo_items (user_id)",
];

/// Postgres-backed store. Each operation is a single statement, so every
/// write commits atomically without an explicit transaction.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, DatabaseError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;
        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn init_schema(&self) -> Result<(), DatabaseError> {
        for statement in SCHEMA {
            sqlx::query(*statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl Store for PgStore {
    async fn insert_user(&self, username: &str, password_hash: &str) -> Result<User, DatabaseError> {
        let query = r#"
            INSERT INTO users (username, password_hash)
            VALUES ($1, $2)
            RETURNING id, username, password_hash
        "#;

        sqlx::query_as::<_, User>(query)
            .bind(username)
            .bind(password_hash)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    DatabaseError::DuplicateUsername(username.to_string())
                }
                other => other.into(),
            })
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn list_items(&self, owner: UserId) -> Result<Vec<TodoItem>, DatabaseError> {
        let items = sqlx::query_as::<_, TodoItem>(
            "SELECT id, user_id, content, done FROM todo_items WHERE user_id = $1 ORDER BY id",
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    async fn insert_item(&self, owner: UserId, content: &str) -> Result<TodoItem, DatabaseError> {
        let item = sqlx::query_as::<_, TodoItem>(
            r#"
            INSERT INTO todo_items (user_id, content)
            VALUES ($1, $2)
            RETURNING id, user_id, content, done
            "#,
        )
        .bind(owner)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;
        Ok(item)
    }

    async fn complete_item(&self, owner: UserId, item: ItemId) -> Result<TodoItem, DatabaseError> {
        sqlx::query_as::<_, TodoItem>(
            r#"
            UPDATE todo_items SET done = TRUE
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, content, done
            "#,
        )
        .bind(item)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| item_not_found(item))
    }

    async fn delete_item(&self, owner: UserId, item: ItemId) -> Result<TodoItem, DatabaseError> {
        sqlx::query_as::<_, TodoItem>(
            r#"
            DELETE FROM todo_items
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, content, done
            "#,
        )
        .bind(item)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| item_not_found(item))
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
