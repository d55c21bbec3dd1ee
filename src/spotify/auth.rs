use std::sync::Arc;

use chrono::Utc;
use reqwest::Client;
use url::Url;

use crate::{
    config::Settings,
    error::{Error, Result},
    management::TokenStore,
    spotify::SpotifyClient,
    types::{RedirectHint, Token, TokenResponse},
};

/// OAuth 2.0 authorization code flow against the Spotify accounts service,
/// with tokens persisted through an injected [`TokenStore`].
///
/// One session is built per request. It carries the client credentials and
/// the callback URI; the post-login destination travels as an explicit
/// [`RedirectHint`] so the authorization request and the code exchange always
/// agree on the redirect URI.
///
/// # Lifecycle
///
/// 1. [`build_authorize_url`](Self::build_authorize_url) sends the user to
///    Spotify.
/// 2. [`exchange_code`](Self::exchange_code) trades the returned code for
///    tokens, looks up the user id and caches the record under it.
/// 3. [`get_valid_access_token`](Self::get_valid_access_token) serves later
///    requests from the cache, refreshing once the access token has expired.
pub struct OAuthSession {
    http: Client,
    client_id: String,
    client_secret: String,
    scope: String,
    callback_url: String,
    auth_url: String,
    token_url: String,
    api_url: String,
    store: Arc<dyn TokenStore>,
    username: Option<String>,
}

impl OAuthSession {
    /// Builds a session from the app settings.
    ///
    /// # Arguments
    ///
    /// * `settings` - Client credentials, scope, public URL and endpoints
    /// * `http` - Shared reqwest client used for both token and API calls
    /// * `store` - Where token records are read from and written to
    pub fn new(settings: &Settings, http: Client, store: Arc<dyn TokenStore>) -> Self {
        Self {
            http,
            client_id: settings.client_id.clone(),
            client_secret: settings.client_secret.clone(),
            scope: settings.scope.clone(),
            callback_url: settings.callback_url(),
            auth_url: settings.auth_url.clone(),
            token_url: settings.token_url.clone(),
            api_url: settings.api_url.clone(),
            store,
            username: None,
        }
    }

    /// User bound by a successful code exchange.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Callback URI registered with Spotify, plus `?r=<hint>` when the hint
    /// carries one.
    ///
    /// The exact string must be identical in the authorization request and
    /// the code exchange.
    pub fn redirect_uri(&self, hint: RedirectHint) -> String {
        match hint.as_param() {
            Some(r) => format!("{}?r={}", self.callback_url, r),
            None => self.callback_url.clone(),
        }
    }

    /// Spotify authorization URL for this app.
    ///
    /// Deterministic: the same settings and hint always give the same URL.
    pub fn build_authorize_url(&self, hint: RedirectHint) -> Result<Url> {
        let redirect_uri = self.redirect_uri(hint);
        Url::parse_with_params(
            &self.auth_url,
            &[
                ("client_id", self.client_id.as_str()),
                ("response_type", "code"),
                ("redirect_uri", redirect_uri.as_str()),
                ("scope", self.scope.as_str()),
            ],
        )
        .map_err(|e| Error::Config(format!("invalid authorization url: {}", e)))
    }

    /// Exchanges an authorization code for tokens and caches them under the
    /// owning user's id.
    ///
    /// `hint` must be the one the authorization URL was built with, Spotify
    /// rejects the exchange when the redirect URIs differ.
    ///
    /// # Errors
    ///
    /// - [`Error::Authorization`] when Spotify rejects the code
    /// - [`Error::Api`] when the user profile cannot be fetched
    /// - [`Error::Store`] when the record cannot be cached
    pub async fn exchange_code(&mut self, code: &str, hint: RedirectHint) -> Result<Token> {
        let redirect_uri = self.redirect_uri(hint);
        let response = self
            .request_token(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", redirect_uri.as_str()),
            ])
            .await?;

        let refresh_token = response.refresh_token.clone().ok_or_else(|| {
            Error::Authorization("token response carried no refresh token".to_string())
        })?;

        let profile = self.client_for(&response.access_token).me().await?;

        let token = Token {
            access_token: response.access_token,
            refresh_token,
            expires_at: Utc::now().timestamp().saturating_add(response.expires_in),
            scope: response.scope.unwrap_or_else(|| self.scope.clone()),
            username: profile.id.clone(),
        };

        self.store.save(&profile.id, &token).await?;
        self.username = Some(profile.id);

        Ok(token)
    }

    /// Access token for `username`, refreshed first if it has expired.
    ///
    /// `Ok(None)` means nothing is cached for the user and they have to log
    /// in. A refreshed record is written back before its token is returned.
    ///
    /// # Errors
    ///
    /// [`Error::Authorization`] when the refresh is rejected, e.g. because the
    /// user revoked access. There is no retry.
    pub async fn get_valid_access_token(&self, username: &str) -> Result<Option<String>> {
        let Some(token) = self.store.load(username).await? else {
            return Ok(None);
        };

        if !token.is_expired() {
            return Ok(Some(token.access_token));
        }

        let refreshed = self.refresh(&token).await?;
        self.store.save(username, &refreshed).await?;

        Ok(Some(refreshed.access_token))
    }

    /// Cached record for `username`, as stored.
    pub async fn cached_token(&self, username: &str) -> Result<Option<Token>> {
        self.store.load(username).await
    }

    /// Trades the refresh token for a new access token.
    ///
    /// Spotify may or may not rotate the refresh token; when the response
    /// omits it the previous one stays valid and is kept, likewise the scope.
    ///
    /// The new record is returned, not stored; see
    /// [`get_valid_access_token`](Self::get_valid_access_token).
    ///
    /// # Errors
    ///
    /// [`Error::Authorization`] when Spotify rejects the refresh token.
    pub async fn refresh(&self, token: &Token) -> Result<Token> {
        let response = self
            .request_token(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", token.refresh_token.as_str()),
            ])
            .await?;

        Ok(Token {
            access_token: response.access_token,
            refresh_token: response
                .refresh_token
                .unwrap_or_else(|| token.refresh_token.clone()),
            expires_at: Utc::now().timestamp().saturating_add(response.expires_in),
            scope: response.scope.unwrap_or_else(|| token.scope.clone()),
            username: token.username.clone(),
        })
    }

    /// Web API client authenticated with `access_token`.
    pub fn client_for(&self, access_token: &str) -> SpotifyClient {
        SpotifyClient::new(self.http.clone(), self.api_url.clone(), access_token)
    }

    async fn request_token(&self, form: &[(&str, &str)]) -> Result<TokenResponse> {
        let response = self
            .http
            .post(&self.token_url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Authorization(format!(
                "token endpoint returned {}: {}",
                status, body
            )));
        }

        Ok(response.json::<TokenResponse>().await?)
    }
}
