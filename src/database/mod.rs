pub mod manager;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod store;

pub use manager::{DatabaseError, DatabaseManager};
pub use memory::MemoryStore;
pub use models::{ItemId, TodoItem, User, UserId};
pub use postgres::PgStore;
pub use store::Store;
