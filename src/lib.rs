use axum::{
    routing::{get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod auth;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod state;

use handlers::{protected, public};
use state::AppState;

/// Build the full HTTP application
pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(public::root))
        .route("/health", get(public::health))
        .merge(auth_public_routes())
        // Bearer token required
        .merge(todo_routes(state.clone()))
        // Global middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

fn auth_public_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(public::auth::register))
        .route("/login", post(public::auth::login))
}

fn todo_routes(state: AppState) -> Router<AppState> {
    use protected::todo;

    Router::new()
        .route("/todo", get(todo::list).post(todo::create))
        .route("/todo/:id", put(todo::complete).delete(todo::delete))
        // route_layer so unknown paths still 404 instead of 401
        .route_layer(axum::middleware::from_fn_with_state(
            state,
            middleware::jwt_auth_middleware,
        ))
}
