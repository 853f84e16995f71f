//! # CLI Module
//!
//! Command implementations behind the `spotnp` binary. Each command gets a
//! fully built [`Context`](crate::context::Context) from `main` and reports
//! through the logging macros; fatal problems end the process via
//! [`error!`](crate::error!).
//!
//! ## Commands
//!
//! - [`serve`] - host the now-playing endpoint over HTTP
//! - [`invoke`] - run one invocation and print the host response as JSON
//! - [`seed`] - create the two singleton records in a fresh store
//! - [`status`] - show what the store currently holds
//!
//! ## Usage Patterns
//!
//! ### Initial Setup
//! ```bash
//! spotnp seed                      # Create records, token marked expired
//! spotnp invoke                    # First run refreshes the token and polls
//! ```
//!
//! ### Regular Usage
//! ```bash
//! spotnp serve                     # GET /now-playing for the widget
//! spotnp status                    # Inspect token expiry and stored track
//! ```

mod invoke;
mod seed;
mod serve;
mod status;

pub use invoke::invoke;
pub use seed::seed;
pub use serve::serve;
pub use status::status;
