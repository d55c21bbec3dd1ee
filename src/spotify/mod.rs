//! # Spotify Integration Module
//!
//! The layer between the route handlers and Spotify's two services:
//!
//! ```text
//! Route handlers
//!      ↓
//! Spotify Integration Layer
//!     ├── auth      (OAuth 2.0 authorization code flow, token cache)
//!     ├── user      (GET /me)
//!     ├── player    (currently playing)
//!     ├── library   (saved tracks)
//!     └── playlist  (paged membership check, add tracks)
//!      ↓
//! reqwest
//! ```
//!
//! [`auth::OAuthSession`] talks to the accounts service and owns the token
//! lifecycle. [`SpotifyClient`] talks to the Web API with one bearer token;
//! its endpoints live in the submodules as separate `impl` blocks.
//!
//! Every Web API call goes through `error_for_status`, so an expired or
//! revoked token comes back as [`Error::Api`](crate::error::Error::Api) with a
//! status, which callers treat as "log in again".

pub mod auth;
pub mod library;
pub mod player;
pub mod playlist;
pub mod user;

use reqwest::Client;

/// Web API client bound to one user's access token.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    token: String,
}

impl SpotifyClient {
    /// Creates a client for one access token.
    ///
    /// # Arguments
    ///
    /// * `http` - Shared reqwest client, cloning it is cheap
    /// * `api_url` - Web API base such as `https://api.spotify.com/v1`; a
    ///   trailing slash is ignored
    /// * `token` - Bearer token sent with every request
    ///
    /// # Example
    ///
    /// ```
    /// let client = SpotifyClient::new(reqwest::Client::new(), DEFAULT_API_URL, access_token);
    /// let profile = client.me().await?;
    /// ```
    pub fn new(http: Client, api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{uri}{path}", uri = self.api_url, path = path)
    }
}
