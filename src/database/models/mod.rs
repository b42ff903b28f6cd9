pub mod todo_item;
pub mod user;

pub use todo_item::{ItemId, TodoItem, MAX_CONTENT_LENGTH};
pub use user::{User, UserId, MAX_USERNAME_LENGTH};
