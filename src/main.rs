mod model;
mod server;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    tracing::debug!(?config, "Loaded configuration");

    let db = startup::connect_to_database(&config).await?;
    let bind_addr = config.bind_addr.clone();
    let state = AppState::new(config, db);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Starting server on {}", bind_addr);

    axum::serve(listener, router::router(state))
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
