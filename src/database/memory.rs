use async_trait::async_trait;
use tokio::sync::RwLock;

use super::manager::DatabaseError;
use super::models::{ItemId, TodoItem, User, UserId};
use super::store::{item_not_found, Store};

/// Process-local store. Ids are assigned from 1 upwards per table.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    items: Vec<TodoItem>,
    last_user_id: UserId,
    last_item_id: ItemId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_user(&self, username: &str, password_hash: &str) -> Result<User, DatabaseError> {
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.username == username) {
            return Err(DatabaseError::DuplicateUsername(username.to_string()));
        }
        tables.last_user_id += 1;
        let user = User {
            id: tables.last_user_id,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.username == username).cloned())
    }

    async fn list_items(&self, owner: UserId) -> Result<Vec<TodoItem>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables
            .items
            .iter()
            .filter(|item| item.user_id == owner)
            .cloned()
            .collect())
    }

    async fn insert_item(&self, owner: UserId, content: &str) -> Result<TodoItem, DatabaseError> {
        let mut tables = self.tables.write().await;
        tables.last_item_id += 1;
        let item = TodoItem {
            id: tables.last_item_id,
            user_id: owner,
            content: content.to_string(),
            done: false,
        };
        tables.items.push(item.clone());
        Ok(item)
    }

    async fn complete_item(&self, owner: UserId, item: ItemId) -> Result<TodoItem, DatabaseError> {
        let mut tables = self.tables.write().await;
        let entry = tables
            .items
            .iter_mut()
            .find(|i| i.id == item && i.user_id == owner)
            .ok_or_else(|| item_not_found(item))?;
        entry.done = true;
        Ok(entry.clone())
    }

    async fn delete_item(&self, owner: UserId, item: ItemId) -> Result<TodoItem, DatabaseError> {
        let mut tables = self.tables.write().await;
        let index = tables
            .items
            .iter()
            .position(|i| i.id == item && i.user_id == owner)
            .ok_or_else(|| item_not_found(item))?;
        Ok(tables.items.remove(index))
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}
