// handlers/mod.rs - Two-tier handler layout
//
// Public (no auth) → Protected (bearer token required)
pub mod protected;
pub mod public;
pub mod utils;
