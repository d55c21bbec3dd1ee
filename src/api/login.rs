use std::collections::HashMap;

use axum::{Extension, extract::Query, response::Response};

use crate::{api::found, error::Result, server::AppState, types::RedirectHint};

pub async fn login(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<AppState>,
) -> Result<Response> {
    let hint = RedirectHint::parse(params.get("r").map(String::as_str));
    let auth_url = state.session().build_authorize_url(hint)?;
    Ok(found(auth_url.as_str()))
}
