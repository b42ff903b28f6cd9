use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use todo_api::cli::Cli;
use todo_api::config::AppConfig;
use todo_api::database::DatabaseManager;
use todo_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET_KEY, etc.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env().context("failed to load configuration")?;
    cli.apply(&mut config);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.environment.default_log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    config.log_startup();

    let store = DatabaseManager::connect(&config.database)
        .await
        .context("failed to open database")?;

    let bind_addr = config.server.bind_addr();
    let state = AppState::new(config, store);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("todo-api listening on http://{}", bind_addr);

    axum::serve(listener, todo_api::app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("todo-api stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
