//! spotnp: Spotify now-playing proxy library
//!
//! Keeps a single account's "now playing" state in a small durable store and
//! serves it to a public website widget without hammering the Spotify Web
//! API. Each invocation refreshes the access token when it has expired,
//! polls Spotify at most once per five-second window and answers with a
//! stable JSON snapshot.
//!
//! # Modules
//!
//! - `api` - HTTP handlers and the invocation response builder
//! - `cli` - Command implementations behind the `spotnp` binary
//! - `config` - Environment and `.env` configuration
//! - `context` - Collaborators shared by all invocations
//! - `error` - Error types
//! - `handler` - One invocation, end to end
//! - `management` - Token refresh and poll coordination
//! - `server` - axum server hosting the API
//! - `spotify` - Spotify Web API client
//! - `store` - Durable singleton records
//! - `types` - Records and wire types
//! - `utils` - Normalization helpers

pub mod api;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod handler;
pub mod management;
pub mod server;
pub mod spotify;
pub mod store;
pub mod types;
pub mod utils;

/// A convenient Result type alias for the command layer.
///
/// Library operations return their own error enums; commands glue several
/// of them together and only need to print the failure.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point to stderr.
///
/// Log lines go to stderr so `spotnp invoke` keeps stdout for the response.
///
/// # Example
///
/// ```
/// info!("Serving now playing on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark to stderr.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for fatal startup failures in the binary. Library code never calls
/// it; an invocation must not take the process down.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark to stderr.
///
/// Used for every failure an invocation absorbs: upstream errors, failed
/// token refreshes and store writes that did not go through.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
