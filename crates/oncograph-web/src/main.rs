//! Oncograph Web Server
//!
//! Run with: cargo run -p oncograph-web

use tracing::info;
use tracing_subscriber::EnvFilter;

use oncograph_web::config::ServerConfig;
use oncograph_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;

    let state = if config.seed_demo {
        info!("seeding demo patient dataset");
        AppState::with_demo_data()?
    } else {
        AppState::new()
    };

    let app = oncograph_web::router::build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
