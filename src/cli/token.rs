use chrono::{DateTime, Utc};

use crate::{config::Settings, error, info, server::AppState, success, warning};

/// Prints the cache status of one user's token. Never prints the token itself.
pub async fn token(username: String) {
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => error!("Cannot load settings: {}", e),
    };

    let state = match AppState::with_redis(settings) {
        Ok(state) => state,
        Err(e) => error!("Cannot set up the token store: {}", e),
    };

    let token = match state.session().cached_token(&username).await {
        Ok(Some(token)) => token,
        Ok(None) => {
            warning!("No token cached for {}. Log in through /login.", username);
            return;
        }
        Err(e) => error!("Cannot read the token cache: {}", e),
    };

    let expires = DateTime::<Utc>::from_timestamp(token.expires_at, 0)
        .map(|at| at.to_rfc3339())
        .unwrap_or_else(|| token.expires_at.to_string());

    if token.is_expired() {
        info!(
            "Token for {} expired at {}, it is refreshed on the next request.",
            username, expires
        );
    } else {
        success!("Token for {} valid until {}", username, expires);
    }
    info!("Scopes: {}", token.scopes().join(", "));
}
