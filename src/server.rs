use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{Extension, Router, routing::get};
use reqwest::Client;

use crate::{
    Res, api,
    config::Settings,
    error::Error,
    info,
    management::{MemoryTokenStore, RedisConnection, RedisTokenStore, TokenStore},
    spotify::auth::OAuthSession,
};

/// Shared by every request. Cloning is cheap, everything heavy sits behind
/// an `Arc` or is a handle already (`reqwest::Client`).
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub store: Arc<dyn TokenStore>,
    pub http: Client,
    pub store_kind: &'static str,
}

impl AppState {
    pub fn new(settings: Settings, store: Arc<dyn TokenStore>, store_kind: &'static str) -> Self {
        Self {
            settings: Arc::new(settings),
            store,
            http: Client::new(),
            store_kind,
        }
    }

    /// Redis-backed state. No connection is opened until the first request
    /// touches the token cache.
    pub fn with_redis(settings: Settings) -> Result<Self, Error> {
        let connection = RedisConnection::new(&settings.redis)?;
        let store: Arc<dyn TokenStore> = Arc::new(RedisTokenStore::new(connection));
        Ok(Self::new(settings, store, "redis"))
    }

    /// State with a process-local token cache, for development without Redis.
    pub fn in_memory(settings: Settings) -> Self {
        Self::new(settings, Arc::new(MemoryTokenStore::new()), "memory")
    }

    /// Fresh OAuth session for one request.
    pub fn session(&self) -> OAuthSession {
        OAuthSession::new(&self.settings, self.http.clone(), Arc::clone(&self.store))
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::index))
        .route("/login", get(api::login))
        .route("/login_result", get(api::login_result))
        .route("/save", get(api::save))
        .route("/health", get(api::health))
        .layer(Extension(state))
}

pub async fn start_api_server(state: AppState) -> Res<()> {
    let addr = SocketAddr::from_str(&state.settings.server_addr)
        .map_err(|e| format!("Failed to parse server address: {}", e))?;

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
