//! Per-user token storage.
//!
//! The OAuth session only knows the [`TokenStore`] trait. Production wires in
//! [`RedisTokenStore`], tests use [`MemoryTokenStore`].

mod redis_store;
mod store;

pub use redis_store::{RedisConnection, RedisTokenStore, TOKENS_KEY};
pub use store::{MemoryTokenStore, TokenStore};
