use axum::extract::DefaultBodyLimit;
use quiz_api::{
    config::{get_config, init_config, LogFormat},
    database::store::QuizStore,
    middleware::cors::cors_layer,
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_config()?;
    let config = get_config();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("quiz_api=info,tower_http=info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    let app_state = AppState::new(QuizStore::new()).with_environment(config.environment);

    let app = routes::router(app_state)
        .layer(cors_layer(config)?)
        .layer(DefaultBodyLimit::max(config.body_limit_bytes));

    let addr: SocketAddr = config.server_address.parse()?;
    info!(
        environment = config.environment.as_str(),
        "Server listening on {}", addr
    );
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}
