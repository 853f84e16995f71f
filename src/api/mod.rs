//! # API Module
//!
//! HTTP surface of spotnp when it runs as a long-lived server instead of
//! inside a serverless host.
//!
//! ## Endpoints
//!
//! - [`now_playing`] - runs one invocation per request and answers with its
//!   body and headers. Store read failures become a 500 that still carries
//!   the CORS header, so the widget can tell "down" from "blocked".
//! - [`health`] - status and version for monitoring.
//!
//! [`build_response`] is the host-independent part: it shapes a track into
//! the `statusCode` / `headers` / `body` envelope both surfaces return.

mod health;
mod now_playing;
mod response;

pub use health::health;
pub use now_playing::now_playing;
pub use response::{CONTENT_TYPE_JSON, build_response};
