use std::sync::Arc;

use anyhow::Result;
use axum::{Router, http::HeaderValue};
use ecoclean_report::HttpPredictor;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::routes::AppState;

/// Cross-origin policy for the browser front end. An empty list allows any origin.
pub fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.is_empty() {
        return Ok(layer.allow_origin(Any));
    }

    let origins = allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(layer.allow_origin(origins))
}

/// Full application: routes plus the cross-cutting layers.
pub fn app(state: AppState) -> Result<Router> {
    let cors = cors_layer(&state.config.server.allowed_origins)?;

    Ok(crate::routes::router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

pub async fn serve(
    config: crate::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting ecoclean server...");

    // Use CLI overrides if provided, otherwise use config
    let host = host_override.unwrap_or(config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    // Write pool: 1 connection, serializes every write
    let write_pool = crate::db::create_write_pool(&config.database.url).await?;
    crate::db::migrate(&write_pool).await?;

    let read_pool =
        crate::db::create_read_pool(&config.database.url, config.database.max_connections).await?;

    let shared_state = ecoclean_shared::State {
        read_db: read_pool.clone(),
        write_db: write_pool.clone(),
    };

    let predictor = HttpPredictor::new(
        &config.ml.base_url,
        &config.ml.predict_path,
        config.ml.timeout(),
    )?;
    tracing::info!("Prediction service at {}", predictor.url());

    let admin = ecoclean_user::AdminGate::new(&config.admin.username, &config.admin.password);

    let state = AppState {
        user_command: ecoclean_user::Command::new(shared_state.clone()),
        event_command: ecoclean_event::Command::new(shared_state),
        admin,
        predictor: Arc::new(predictor),
        pool: read_pool.clone(),
        config,
    };

    let app = app(state)?;

    // Start server
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Closing database pools...");
    read_pool.close().await;
    write_pool.close().await;

    tracing::info!("Server shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }

    tracing::info!("Starting graceful shutdown...");
}
