use axum::{Extension, response::Json};
use serde_json::{Value, json};

use crate::server::AppState;

pub async fn health(Extension(state): Extension<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "token_store": state.store_kind,
    }))
}
