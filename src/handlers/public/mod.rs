// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Greeting, liveness, and token acquisition.
pub mod auth;
pub mod health;
pub mod root;

pub use health::health;
pub use root::root;
