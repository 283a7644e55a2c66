mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let app = router::router().with_state(AppState::new(db, config.favorite_scope));

    let listener = TcpListener::bind((config.host, config.port)).await?;
    tracing::info!(
        "Starting server on {}:{} (favorite scope: {:?})",
        config.host,
        config.port,
        config.favorite_scope
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
