//! Spotify "save what's playing" web app.
//!
//! A handful of HTTP routes log a user in with Spotify, show the track they
//! are currently listening to and, on request, like that track and add it to
//! a configured playlist. OAuth tokens are cached per user in Redis and
//! refreshed transparently once they expire.
//!
//! # Modules
//!
//! - `api` - HTTP route handlers
//! - `cli` - command implementations behind the binary
//! - `config` - environment loading and `Settings`
//! - `error` - error type and its HTTP mapping
//! - `management` - per-user token storage (Redis, in-memory)
//! - `save` - the idempotent "save current track" operation
//! - `server` - application state, router and listener
//! - `spotify` - OAuth session and Web API client
//! - `types` - data structures exchanged with Spotify and stored in Redis
//! - `utils` - rendering helpers

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod save;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Boxed-error result used by the command layer.
///
/// Library code returns [`error::Result`]; commands only need to report
/// failures, so anything `Send + Sync` goes.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for fatal startup failures; request handlers never call this.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable request failures such as a rejected refresh.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
