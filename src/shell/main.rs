use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use email_signups::shell::config::{AppConfig, load_env_file};
use email_signups::shell::http::{cors_layer, router};
use email_signups::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_env_file(".env")?;
    let config = AppConfig::from_env()?;

    fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter)
                .with_context(|| format!("invalid log filter {:?}", config.log_filter))?,
        )
        .init();

    // In-memory store for now: signups live until the process exits.
    let mut app = router(AppState::in_memory());
    if let Some(cors) = cors_layer(&config) {
        app = app.layer(cors);
    }

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Email signup endpoint: http://{}/api/email-signup", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
