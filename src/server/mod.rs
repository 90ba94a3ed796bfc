use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::api::{create_cafe_routes, create_health_routes};
use crate::catalog::CityCatalog;
use crate::config::ServerConfig;

/// Builds the application router around a shared, read-only catalog.
pub fn create_app(catalog: Arc<CityCatalog>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .merge(create_cafe_routes())
        .merge(create_health_routes())
        .layer(cors)
        .with_state(catalog)
}

pub fn resolve_addr(
    host: &str,
    port: u16,
    ipv6: bool,
) -> Result<SocketAddr, Box<dyn std::error::Error + Send + Sync>> {
    let ip = match ipv6 {
        true => IpAddr::V6(host.parse()?),
        false => IpAddr::V4(host.parse()?),
    };

    Ok(SocketAddr::new(ip, port))
}

#[tracing::instrument(level = "info", name = "Server", skip_all)]
pub async fn start_server(
    config: ServerConfig,
    catalog: CityCatalog,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = resolve_addr(&config.host, config.port, config.ipv6)?;
    let app = create_app(Arc::new(catalog));

    tracing::info!("Starting server at http://{}", addr);
    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }

    tracing::info!("Shutdown signal received");
}
