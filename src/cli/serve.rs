use std::sync::Arc;

use crate::{context::Context, error, server};

pub async fn serve(ctx: Context) {
    if let Err(e) = server::start_api_server(Arc::new(ctx)).await {
        error!("Server stopped: {}", e);
    }
}
