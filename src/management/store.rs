use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{error::Result, types::Token};

/// Load and save token records by user identity.
///
/// Later saves for the same user overwrite earlier ones. Implementations add
/// no locking of their own, concurrent writers race and the last one wins.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn load(&self, username: &str) -> Result<Option<Token>>;

    async fn save(&self, username: &str, token: &Token) -> Result<()>;
}

/// Process-local store, used by tests and the `--memory` development mode.
#[derive(Default)]
pub struct MemoryTokenStore {
    tokens: Mutex<HashMap<String, Token>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.tokens.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tokens.lock().await.is_empty()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load(&self, username: &str) -> Result<Option<Token>> {
        Ok(self.tokens.lock().await.get(username).cloned())
    }

    async fn save(&self, username: &str, token: &Token) -> Result<()> {
        self.tokens
            .lock()
            .await
            .insert(username.to_string(), token.clone());
        Ok(())
    }
}
