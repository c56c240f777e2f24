use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use xr_core::Result;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/articles", get(handlers::list_articles))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Binds `host:port`. `host` may be an IP address or a resolvable hostname.
pub async fn bind(host: &str, port: u16) -> Result<TcpListener> {
    Ok(TcpListener::bind((host, port)).await?)
}

pub async fn serve(host: &str, port: u16, state: AppState) -> Result<()> {
    let app = create_app(state);
    let listener = bind(host, port).await?;
    info!("🚀 Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
