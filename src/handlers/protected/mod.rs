// handlers/protected/mod.rs - Handlers behind the bearer token layer
//
// Every handler here receives the caller's `Identity` from request
// extensions and scopes all store access to it.
pub mod todo;
