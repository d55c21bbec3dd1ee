use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tokio::sync::OnceCell;

use crate::{
    config::RedisSettings,
    error::Result,
    management::TokenStore,
    types::Token,
};

/// Hash holding every cached token, one field per username.
pub const TOKENS_KEY: &str = "spotifytokens";

/// Shared Redis connection, opened on first use.
///
/// Building the value never touches the network. The first command connects
/// and every later one reuses that connection; `ConnectionManager` clones are
/// cheap handles onto it.
pub struct RedisConnection {
    client: Client,
    manager: OnceCell<ConnectionManager>,
}

impl RedisConnection {
    pub fn new(settings: &RedisSettings) -> Result<Self> {
        let url = settings.connection_url()?;
        let client = Client::open(url.as_str())?;
        Ok(Self {
            client,
            manager: OnceCell::new(),
        })
    }

    /// Whether a connection has been established yet.
    pub fn is_connected(&self) -> bool {
        self.manager.initialized()
    }

    /// Handle onto the shared connection, connecting on the first call.
    ///
    /// A failed attempt leaves nothing behind, the next call connects again.
    ///
    /// # Errors
    ///
    /// [`Error::Store`](crate::error::Error::Store) when Redis cannot be reached.
    pub async fn get(&self) -> Result<ConnectionManager> {
        let manager = self
            .manager
            .get_or_try_init(|| ConnectionManager::new(self.client.clone()))
            .await?;
        Ok(manager.clone())
    }
}

/// Token cache backed by a single Redis hash of JSON records.
pub struct RedisTokenStore {
    connection: RedisConnection,
    key: String,
}

impl RedisTokenStore {
    pub fn new(connection: RedisConnection) -> Self {
        Self {
            connection,
            key: TOKENS_KEY.to_string(),
        }
    }
}

#[async_trait]
impl TokenStore for RedisTokenStore {
    async fn load(&self, username: &str) -> Result<Option<Token>> {
        let mut conn = self.connection.get().await?;
        let raw: Option<String> = conn.hget(&self.key, username).await?;
        match raw {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, username: &str, token: &Token) -> Result<()> {
        let json = serde_json::to_string(token)?;
        let mut conn = self.connection.get().await?;
        let _: () = conn.hset(&self.key, username, json).await?;
        Ok(())
    }
}
