//! Tests marked `#[ignore]` run against a real Redis. Start one with
//! `docker run -p 6379:6379 redis` then
//! `cargo test --test redis_store_test -- --ignored`.

use chrono::Utc;
use spotsave::{
    config::RedisSettings,
    error::Error,
    management::{RedisConnection, RedisTokenStore, TokenStore},
    types::Token,
};

fn redis_settings() -> RedisSettings {
    RedisSettings {
        host: std::env::var("REDIS_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
        port: std::env::var("REDIS_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(6379),
        db: 15,
        password: std::env::var("REDIS_PASSWORD").ok(),
    }
}

fn create_token(username: &str, access_token: &str) -> Token {
    Token {
        access_token: access_token.to_string(),
        refresh_token: "refresh".to_string(),
        expires_at: Utc::now().timestamp() + 3600,
        scope: "user-library-read".to_string(),
        username: username.to_string(),
    }
}

fn unreachable_settings() -> RedisSettings {
    // Nothing listens here
    RedisSettings {
        host: "127.0.0.1".to_string(),
        port: 1,
        db: 0,
        password: None,
    }
}

#[test]
fn test_connection_is_lazy() {
    let connection = RedisConnection::new(&unreachable_settings()).unwrap();
    assert!(!connection.is_connected());

    let _store = RedisTokenStore::new(connection);
}

#[tokio::test]
async fn test_failed_connect_is_retried() {
    let connection = RedisConnection::new(&unreachable_settings()).unwrap();

    let first = connection.get().await;
    assert!(matches!(first, Err(Error::Store(_))));
    assert!(!connection.is_connected());

    // The failure is not cached, the second call tries again
    let second = connection.get().await;
    assert!(matches!(second, Err(Error::Store(_))));
    assert!(!connection.is_connected());
}

#[tokio::test]
async fn test_store_surfaces_unreachable_redis() {
    let store = RedisTokenStore::new(RedisConnection::new(&unreachable_settings()).unwrap());

    let err = store.load("alice").await.unwrap_err();
    assert!(matches!(err, Error::Store(_)));
    assert!(!err.requires_login());
}

#[tokio::test]
#[ignore]
async fn test_connection_is_shared() {
    let connection = RedisConnection::new(&redis_settings()).unwrap();
    connection.get().await.unwrap();
    assert!(connection.is_connected());

    // Later calls hand out the same connection instead of opening another
    let mut conn = connection.get().await.unwrap();
    let pong: String = redis::cmd("PING").query_async(&mut conn).await.unwrap();
    assert_eq!(pong, "PONG");
    assert!(connection.is_connected());
}

#[tokio::test]
#[ignore]
async fn test_roundtrip_and_overwrite() {
    let store = RedisTokenStore::new(RedisConnection::new(&redis_settings()).unwrap());
    let username = format!("test-user-{}", Utc::now().timestamp_nanos_opt().unwrap_or(0));

    assert_eq!(store.load(&username).await.unwrap(), None);

    let first = create_token(&username, "first");
    store.save(&username, &first).await.unwrap();
    assert_eq!(store.load(&username).await.unwrap(), Some(first));

    // Last write wins
    let second = create_token(&username, "second");
    store.save(&username, &second).await.unwrap();
    assert_eq!(store.load(&username).await.unwrap(), Some(second));
}
