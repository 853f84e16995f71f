use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tokio::net::TcpListener;

use crate::{api, context::Context, info};

pub fn router(ctx: Arc<Context>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/now-playing", get(api::now_playing))
        .layer(Extension(ctx))
}

/// Serves the API on an already bound listener until the process stops.
pub async fn serve(listener: TcpListener, ctx: Arc<Context>) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Serving now playing on http://{}/now-playing", addr);
    }
    axum::serve(listener, router(ctx)).await
}

pub async fn start_api_server(ctx: Arc<Context>) -> std::io::Result<()> {
    let listener = TcpListener::bind(ctx.config.server_address).await?;
    serve(listener, ctx).await
}
