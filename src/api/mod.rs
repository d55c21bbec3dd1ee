//! # API Module
//!
//! Route handlers for the web app.
//!
//! ## Endpoints
//!
//! - [`index`] - `GET /?username=` shows what the user is listening to
//! - [`login`] - `GET /login?r=` redirects to Spotify's consent page
//! - [`login_result`] - `GET /login_result?code=&r=` completes the OAuth flow
//! - [`save`] - `GET /save?username=` likes the current track and adds it to
//!   the playlist
//! - [`health`] - `GET /health` liveness and version
//!
//! ## Authorization failures
//!
//! A missing username or an empty token cache is the normal "not logged in"
//! branch and redirects to `/login`. Rejected refreshes and API calls that
//! fail with an HTTP status do the same, carrying the `r` hint so the user
//! ends up back where they started. Anything else (Redis down, network
//! errors) becomes a 500.

mod health;
mod index;
mod login;
mod login_result;
mod save;

use std::collections::HashMap;

use axum::{
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};

pub use health::health;
pub use index::index;
pub use login::login;
pub use login_result::login_result;
pub use save::save;

use crate::{
    error::{Error, Result},
    types::RedirectHint,
    warning,
};

/// Plain `302 Found`, what browsers expect after a GET.
pub(crate) fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location.to_string())]).into_response()
}

/// Non-empty query parameter.
pub(crate) fn param<'a>(params: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    params
        .get(name)
        .map(String::as_str)
        .filter(|v| !v.is_empty())
}

/// Redirects to login for authorization failures, passes everything else on.
pub(crate) fn login_or_fail(err: Error, hint: RedirectHint) -> Result<Response> {
    if err.requires_login() {
        warning!("Sending user back to login: {}", err);
        Ok(found(&hint.login_path()))
    } else {
        Err(err)
    }
}
