//! Error type shared by the token store, the OAuth session and the route handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::warning;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("authorization failed: {0}")]
    Authorization(String),

    #[error("spotify api error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("token store error: {0}")]
    Store(#[from] redis::RedisError),

    #[error("invalid token record: {0}")]
    Serde(#[from] serde_json::Error),
}

impl Error {
    /// Whether the user should be sent back through the login flow.
    ///
    /// Rejected code exchanges and refreshes qualify, as does any response
    /// from the music API that carried an error status (expired or revoked
    /// access tokens surface as 401 there). Transport failures, store
    /// failures and malformed payloads do not.
    pub fn requires_login(&self) -> bool {
        match self {
            Error::Authorization(_) => true,
            Error::Api(e) => e.status().is_some(),
            _ => false,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        warning!("Request failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
