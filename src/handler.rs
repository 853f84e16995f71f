//! One invocation of the now-playing function.
//!
//! ```text
//! get_auth ─→ refresh token if expired ─→ get_track
//!                                            │
//!                    last_request_at < now ? ┤
//!                      no ─→ cached track, isCached = true
//!                      yes ─→ poll, diff, write, advance last_request_at
//!                                            │
//!                                     build_response
//! ```
//!
//! Concurrent invocations are not serialized. Two of them inside the same
//! window may both poll; the store keeps whichever wrote last.

use crate::{
    api,
    context::Context,
    error::InvocationError,
    management::{PlaybackCoordinator, TokenManager},
    types::InvocationResponse,
    utils,
};

/// Runs one invocation against the current wall clock.
pub async fn handle_invocation(ctx: &Context) -> Result<InvocationResponse, InvocationError> {
    invoke_at(ctx, utils::now()).await
}

/// Runs one invocation as if the time were `now` (unix seconds).
///
/// # Errors
///
/// Only a failed read of either singleton record is returned. Every
/// upstream problem degrades to serving the stored track.
pub async fn invoke_at(ctx: &Context, now: i64) -> Result<InvocationResponse, InvocationError> {
    let store = ctx.store.as_ref();

    let auth = store.get_auth().await?;
    let token = TokenManager::new(store, &ctx.spotify)
        .get_valid_token(&auth, now)
        .await;

    let cached = store.get_track().await?;

    let (track, is_cached) = if PlaybackCoordinator::should_poll(&auth, now) {
        let report = PlaybackCoordinator::new(store, &ctx.spotify)
            .poll(&token, &cached, now)
            .await;
        (report.track, !report.fresh)
    } else {
        (cached, true)
    };

    Ok(api::build_response(
        &track,
        is_cached,
        &ctx.config.allow_origin,
    )?)
}
