mod auth;
mod playback;

pub use auth::TOKEN_LIFETIME_SECS;
pub use auth::TokenManager;
pub use playback::POLL_INTERVAL_SECS;
pub use playback::PlaybackCoordinator;
pub use playback::PollReport;
