//! Configuration management for spotsave.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file. Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory (`spotsave/.env`)
//! 3. `.env` file in the working directory
//! 4. Defaults for everything that has a sensible one

use std::{env, path::PathBuf};

use url::Url;

use crate::error::{Error, Result};

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Permissions requested during authorization.
pub const DEFAULT_SCOPE: &str = "user-read-currently-playing playlist-modify-private \
     user-read-playback-state playlist-modify-public \
     playlist-read-private user-library-read user-library-modify";

/// Loads environment variables from a `.env` file.
///
/// The file in the platform local data directory wins:
/// - Linux: `~/.local/share/spotsave/.env`
/// - macOS: `~/Library/Application Support/spotsave/.env`
/// - Windows: `%LOCALAPPDATA%/spotsave/.env`
///
/// Without it, a `.env` in the working directory is tried. A missing file is
/// not an error, the process environment may already carry everything.
pub fn load_env() -> Result<()> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotsave/.env");

    let loaded = if path.is_file() {
        dotenv::from_path(&path).map(|_| ())
    } else {
        dotenv::dotenv().map(|_| ())
    };

    match loaded {
        Ok(()) => Ok(()),
        Err(dotenv::Error::Io(_)) => Ok(()),
        Err(e) => Err(Error::Config(format!("cannot parse .env file: {}", e))),
    }
}

/// Connection parameters for the Redis token cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedisSettings {
    pub host: String,
    pub port: u16,
    pub db: i64,
    pub password: Option<String>,
}

impl RedisSettings {
    /// Builds a `redis://` URL, percent-encoding the password.
    pub fn connection_url(&self) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "redis://{host}:{port}/{db}",
            host = self.host,
            port = self.port,
            db = self.db
        ))
        .map_err(|e| Error::Config(format!("invalid redis address: {}", e)))?;

        if let Some(password) = self.password.as_deref().filter(|p| !p.is_empty()) {
            url.set_password(Some(password))
                .map_err(|_| Error::Config("cannot set redis password".to_string()))?;
        }

        Ok(url)
    }
}

/// Everything the web app needs at runtime.
#[derive(Debug, Clone)]
pub struct Settings {
    pub client_id: String,
    pub client_secret: String,
    pub scope: String,
    /// External base URL of this app, used to build the OAuth redirect URI.
    pub public_url: String,
    /// Playlist that saved tracks are added to.
    pub playlist_id: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
    pub server_addr: String,
    pub redis: RedisSettings,
}

impl Settings {
    /// Reads the settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when a required variable is missing or a
    /// numeric one cannot be parsed.
    pub fn from_env() -> Result<Self> {
        Ok(Settings {
            client_id: required("SPOTIPY_CLIENT_ID")?,
            client_secret: required("SPOTIPY_CLIENT_SECRET")?,
            scope: optional("SPOTIFY_API_AUTH_SCOPE").unwrap_or_else(|| DEFAULT_SCOPE.to_string()),
            public_url: required("PUBLIC_URL")?,
            playlist_id: required("SPOTIFY_PLAYLIST")?,
            auth_url: optional("SPOTIFY_API_AUTH_URL")
                .unwrap_or_else(|| DEFAULT_AUTH_URL.to_string()),
            token_url: optional("SPOTIFY_API_TOKEN_URL")
                .unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
            api_url: optional("SPOTIFY_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            server_addr: optional("SERVER_ADDRESS")
                .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string()),
            redis: RedisSettings {
                host: optional("REDIS_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
                port: parsed("REDIS_PORT", 6379)?,
                db: parsed("REDIS_DB", 0)?,
                password: optional("REDIS_PASSWORD"),
            },
        })
    }

    /// The callback URI registered with Spotify.
    pub fn callback_url(&self) -> String {
        format!("{}/login_result", self.public_url.trim_end_matches('/'))
    }
}

fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn required(name: &str) -> Result<String> {
    optional(name).ok_or_else(|| Error::Config(format!("{} must be set", name)))
}

fn parsed<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match optional(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| Error::Config(format!("{} is not a valid number: {}", name, raw))),
        None => Ok(default),
    }
}
