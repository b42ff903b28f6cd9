use serde::Serialize;
use sqlx::FromRow;

use super::user::UserId;

pub type ItemId = i64;

/// Column width of `todo_items.content`
pub const MAX_CONTENT_LENGTH: usize = 255;

/// A to-do entry. Serializes to the public `{id, content, done}` shape;
/// the owner never leaves the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct TodoItem {
    pub id: ItemId,
    #[serde(skip_serializing)]
    pub user_id: UserId,
    pub content: String,
    pub done: bool,
}
