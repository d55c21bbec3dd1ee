//! # CLI Module
//!
//! Commands behind the `spotsave` binary. Each one loads what it needs from
//! the environment, reports progress with the console macros and exits with
//! an error message on fatal failures.
//!
//! - [`serve`] - runs the web app
//! - [`token`] - inspects the cached token of one user
//!
//! ```bash
//! spotsave serve                       # Redis-backed, SERVER_ADDRESS or 127.0.0.1:8080
//! spotsave serve --addr 0.0.0.0:5000   # override the bind address
//! spotsave serve --memory              # keep tokens in process memory
//! spotsave token alice                 # when does alice's token expire?
//! ```

mod serve;
mod token;

pub use serve::serve;
pub use token::token;
