use async_trait::async_trait;

use super::manager::DatabaseError;
use super::models::{ItemId, TodoItem, User, UserId};

/// Persistence seam shared by the Postgres and in-memory backends.
///
/// Every item operation is owner-scoped: an item that exists but belongs to
/// another user is indistinguishable from one that does not exist.
#[async_trait]
pub trait Store: Send + Sync {
    /// Insert a new user. Fails with `DuplicateUsername` when the name is taken.
    async fn insert_user(&self, username: &str, password_hash: &str) -> Result<User, DatabaseError>;

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError>;

    /// All items of `owner`, in insertion order.
    async fn list_items(&self, owner: UserId) -> Result<Vec<TodoItem>, DatabaseError>;

    async fn insert_item(&self, owner: UserId, content: &str) -> Result<TodoItem, DatabaseError>;

    /// Mark an item done and return it. Idempotent.
    async fn complete_item(&self, owner: UserId, item: ItemId) -> Result<TodoItem, DatabaseError>;

    /// Remove an item and return its last state.
    async fn delete_item(&self, owner: UserId, item: ItemId) -> Result<TodoItem, DatabaseError>;

    async fn health_check(&self) -> Result<(), DatabaseError>;
}

pub(crate) fn item_not_found(item: ItemId) -> DatabaseError {
    DatabaseError::NotFound(format!("Todo item {} not found", item))
}
