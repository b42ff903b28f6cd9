// handlers/protected/todo/mod.rs - To-do collection and item endpoints
pub mod collection;
pub mod item;

pub use collection::{create, list};
pub use item::{complete, delete};
