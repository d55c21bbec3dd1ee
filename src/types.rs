use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Token record cached per user.
///
/// `expires_at` is absolute (seconds since the Unix epoch) so a record can be
/// judged without knowing when it was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: i64,
    pub scope: String,
    pub username: String,
}

impl Token {
    /// True from the second of `expires_at` on, without any early margin.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.expires_at
    }

    /// Scope as the individual permission strings.
    pub fn scopes(&self) -> Vec<&str> {
        self.scope.split_whitespace().collect()
    }
}

/// Body returned by the token endpoint for both grant types.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default = "default_expires_in")]
    pub expires_in: i64,
}

fn default_expires_in() -> i64 {
    3600
}

/// Where the callback sends the user after a successful login.
///
/// Parsed from the `r` query parameter; anything other than `save` is the
/// default flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedirectHint {
    #[default]
    Default,
    SaveFlow,
}

impl RedirectHint {
    /// Reads the `r` query parameter. Unknown values fall back to
    /// [`RedirectHint::Default`].
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("save") => RedirectHint::SaveFlow,
            _ => RedirectHint::Default,
        }
    }

    /// Value for the `r` query parameter, if the hint carries one.
    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            RedirectHint::Default => None,
            RedirectHint::SaveFlow => Some("save"),
        }
    }

    /// Route the user lands on after the callback.
    pub fn view_path(&self) -> &'static str {
        match self {
            RedirectHint::Default => "/",
            RedirectHint::SaveFlow => "/save",
        }
    }

    /// Login route that replays this hint.
    pub fn login_path(&self) -> String {
        match self.as_param() {
            Some(r) => format!("/login?r={}", r),
            None => "/login".to_string(),
        }
    }
}

/// `GET /me`, trimmed to what the token cache needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleArtist {
    pub name: String,
}

/// Track or episode reported by the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayingItem {
    /// `None` for local files.
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<SimpleArtist>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

/// `GET /me/player/currently-playing`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentlyPlaying {
    #[serde(default)]
    pub is_playing: bool,
    #[serde(default)]
    pub item: Option<PlayingItem>,
}

impl CurrentlyPlaying {
    /// The item, but only while playback is running.
    pub fn playing_item(&self) -> Option<&PlayingItem> {
        if self.is_playing { self.item.as_ref() } else { None }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrackRef {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    /// Null for tracks that are no longer available.
    #[serde(default)]
    pub track: Option<PlaylistTrackRef>,
}

/// One page of a playlist's track listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksPage {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
    #[serde(default)]
    pub next: Option<String>,
}

impl PlaylistTracksPage {
    /// Whether any item on this page is the given track. Unavailable tracks
    /// are skipped.
    pub fn contains(&self, track_id: &str) -> bool {
        self.items.iter().any(|item| {
            item.track
                .as_ref()
                .and_then(|t| t.id.as_deref())
                .is_some_and(|id| id == track_id)
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistResponse {
    pub snapshot_id: String,
}
