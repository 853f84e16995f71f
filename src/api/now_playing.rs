use std::sync::Arc;

use axum::{
    Extension,
    http::{
        StatusCode,
        header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};
use serde_json::json;

use super::response::CONTENT_TYPE_JSON;
use crate::{context::Context, handler, types::InvocationResponse, warning};

pub async fn now_playing(Extension(ctx): Extension<Arc<Context>>) -> Response {
    match handler::handle_invocation(&ctx).await {
        Ok(res) => into_http(res),
        Err(e) => {
            warning!("Invocation failed: {}", e);
            let body = json!({ "error": "now playing state unavailable" }).to_string();
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [
                    (ACCESS_CONTROL_ALLOW_ORIGIN, ctx.config.allow_origin.clone()),
                    (CONTENT_TYPE, CONTENT_TYPE_JSON.to_string()),
                ],
                body,
            )
                .into_response()
        }
    }
}

fn into_http(res: InvocationResponse) -> Response {
    let status = StatusCode::from_u16(res.status_code).unwrap_or(StatusCode::OK);
    (
        status,
        [
            (ACCESS_CONTROL_ALLOW_ORIGIN, res.headers.allow_origin),
            (CONTENT_TYPE, res.headers.content_type),
        ],
        res.body,
    )
        .into_response()
}
