use std::collections::HashMap;

use axum::{
    Extension,
    extract::Query,
    response::{Html, IntoResponse, Response},
};

use crate::{
    api::{found, login_or_fail, param},
    error::Result,
    info,
    save::{SaveResult, save_current_track},
    server::AppState,
    types::RedirectHint,
    utils,
};

pub async fn save(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<AppState>,
) -> Result<Response> {
    let hint = RedirectHint::SaveFlow;
    let Some(username) = param(&params, "username") else {
        return Ok(found(&hint.login_path()));
    };

    let session = state.session();
    let token = match session.get_valid_access_token(username).await {
        Ok(Some(token)) => token,
        Ok(None) => return Ok(found(&hint.login_path())),
        Err(e) => return login_or_fail(e, hint),
    };

    let client = session.client_for(&token);
    match save_current_track(&client, &state.settings.playlist_id).await {
        Ok(SaveResult::Saved(outcome)) => {
            info!(
                "Saved \"{}\" for {} (liked: {}, playlist: {})",
                outcome.title, username, outcome.liked, outcome.added_to_playlist
            );
            Ok(Html(outcome.render()).into_response())
        }
        Ok(SaveResult::NothingPlaying) => Ok(utils::NOTHING_PLAYING.into_response()),
        Err(e) => login_or_fail(e, hint),
    }
}
