use std::collections::HashMap;

use axum::{
    Extension,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use url::form_urlencoded;

use crate::{
    api::{found, param},
    error::{Error, Result},
    server::AppState,
    success,
    types::RedirectHint,
    warning,
};

/// OAuth callback. Spotify appends `code`, the `r` hint is the one we put into
/// the redirect URI ourselves.
pub async fn login_result(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<AppState>,
) -> Result<Response> {
    let Some(code) = param(&params, "code") else {
        return Ok((StatusCode::NOT_FOUND, "Not found").into_response());
    };
    let hint = RedirectHint::parse(params.get("r").map(String::as_str));

    // Only a rejected code goes back through login. Spotify skips the consent
    // page for a returning user, so any later failure would loop straight back
    // here.
    let mut session = state.session();
    let token = match session.exchange_code(code, hint).await {
        Ok(token) => token,
        Err(e @ Error::Authorization(_)) => {
            warning!("Code exchange rejected: {}", e);
            return Ok(found(&hint.login_path()));
        }
        Err(e) => return Err(e),
    };

    success!("Authenticated {}", token.username);

    let username: String = form_urlencoded::byte_serialize(token.username.as_bytes()).collect();
    Ok(found(&format!(
        "{view}?username={username}",
        view = hint.view_path(),
        username = username
    )))
}
