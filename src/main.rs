use anyhow::Context;

use gridlock::{routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Local .env is optional; ignore when absent
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gridlock=info,tower_http=warn".into()),
        )
        .init();

    let state = AppState::new();
    tracing::info!("Game engine initialized");

    let app = routes::router(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);
    let addr = format!("0.0.0.0:{}", port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
