use std::sync::Arc;

use axum::{Extension, response::Json};
use serde_json::{Value, json};

use crate::context::Context;

pub async fn health(Extension(ctx): Extension<Arc<Context>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "store": ctx.store.backend_name(),
    }))
}
