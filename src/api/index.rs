use std::collections::HashMap;

use axum::{
    Extension,
    extract::Query,
    response::{Html, IntoResponse, Response},
};

use crate::{
    api::{found, login_or_fail, param},
    error::Result,
    server::AppState,
    types::RedirectHint,
    utils,
};

pub async fn index(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<AppState>,
) -> Result<Response> {
    let hint = RedirectHint::Default;
    let Some(username) = param(&params, "username") else {
        return Ok(found(&hint.login_path()));
    };

    let session = state.session();
    let token = match session.get_valid_access_token(username).await {
        Ok(Some(token)) => token,
        Ok(None) => return Ok(found(&hint.login_path())),
        Err(e) => return login_or_fail(e, hint),
    };

    let playing = match session.client_for(&token).currently_playing().await {
        Ok(playing) => playing,
        Err(e) => return login_or_fail(e, hint),
    };

    match playing.as_ref().and_then(|p| p.playing_item()) {
        Some(item) => {
            let title = utils::track_title(item);
            let link = utils::track_link(&title, item.external_urls.spotify.as_deref());
            Ok(Html(link).into_response())
        }
        None => Ok(utils::NOTHING_PLAYING.into_response()),
    }
}
