#![allow(dead_code)]

use std::sync::Arc;

use chrono::Utc;
use serde_json::{Value, json};
use spotsave::{
    config::{DEFAULT_SCOPE, RedisSettings, Settings},
    management::{MemoryTokenStore, TokenStore},
    server::AppState,
    spotify::auth::OAuthSession,
    types::Token,
};
use wiremock::MockServer;

pub const PLAYLIST_ID: &str = "playlist1";
pub const BASIC_AUTH: &str = "Basic Y2xpZW50LWlkOmNsaWVudC1zZWNyZXQ=";

/// Settings pointing both Spotify services at the mock server.
pub fn settings(server: &MockServer) -> Settings {
    Settings {
        client_id: "client-id".to_string(),
        client_secret: "client-secret".to_string(),
        scope: DEFAULT_SCOPE.to_string(),
        public_url: "https://spotsave.example".to_string(),
        playlist_id: PLAYLIST_ID.to_string(),
        auth_url: format!("{}/authorize", server.uri()),
        token_url: format!("{}/api/token", server.uri()),
        api_url: format!("{}/v1", server.uri()),
        server_addr: "127.0.0.1:0".to_string(),
        redis: RedisSettings {
            host: "127.0.0.1".to_string(),
            port: 6379,
            db: 0,
            password: None,
        },
    }
}

pub fn state(server: &MockServer, store: Arc<MemoryTokenStore>) -> AppState {
    AppState::new(settings(server), store, "memory")
}

pub fn session(server: &MockServer, store: Arc<MemoryTokenStore>) -> OAuthSession {
    OAuthSession::new(&settings(server), reqwest::Client::new(), store)
}

pub fn token(username: &str, access_token: &str, expires_in: i64) -> Token {
    Token {
        access_token: access_token.to_string(),
        refresh_token: format!("{}-refresh", username),
        expires_at: Utc::now().timestamp() + expires_in,
        scope: DEFAULT_SCOPE.to_string(),
        username: username.to_string(),
    }
}

/// Store with one cached token for `username`.
pub async fn store_with(username: &str, token: Token) -> Arc<MemoryTokenStore> {
    let store = Arc::new(MemoryTokenStore::new());
    store.save(username, &token).await.unwrap();
    store
}

pub fn api_path(path: &str) -> String {
    format!("/v1{}", path)
}

pub fn playing(is_playing: bool) -> Value {
    json!({
        "is_playing": is_playing,
        "item": {
            "id": "track1",
            "name": "Song",
            "artists": [{ "name": "Artist" }, { "name": "Featured" }],
            "external_urls": { "spotify": "https://open.spotify.com/track/track1" }
        }
    })
}

pub fn page(track_ids: &[&str], next: Option<String>) -> Value {
    let items: Vec<Value> = track_ids
        .iter()
        .map(|id| json!({ "track": { "id": id } }))
        .collect();
    json!({ "items": items, "next": next })
}
