mod config;
mod error;
mod routes;
mod state;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::routes::todos::{queries::PgTodoStore, store::InMemoryTodoStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,todo_service=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = match &config.database_url {
        Some(url) => {
            let db = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(url)
                .await
                .context("Error connecting DB")?;

            sqlx::migrate!("./migrations")
                .run(&db)
                .await
                .context("Error running migrations")?;

            state::AppState::new(PgTodoStore::new(db))
        }
        None => {
            tracing::warn!("DATABASE_URL is not set, todos are kept in memory only");
            state::AppState::new(InMemoryTodoStore::new())
        }
    };

    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(config.addr())
        .await
        .with_context(|| format!("failed to bind {}", config.addr()))?;

    tracing::info!(addr = %config.addr(), "server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
