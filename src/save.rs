//! Likes the currently playing track and adds it to the configured playlist.
//!
//! Both halves check membership before mutating, so running the operation
//! again for the same track changes nothing. The two mutations are not
//! atomic: if the playlist add fails after the like went through, the next
//! run finds the like and only retries the add.

use crate::{error::Result, spotify::SpotifyClient, utils};

pub const LIKED_MARKER: &str = "❤️";
pub const PLAYLIST_MARKER: &str = "☑️";

/// What a save attempt did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub liked: bool,
    pub added_to_playlist: bool,
    pub title: String,
    pub href: Option<String>,
}

impl SaveOutcome {
    pub fn markers(&self) -> String {
        let mut actions = String::new();
        if self.liked {
            actions.push_str(LIKED_MARKER);
        }
        if self.added_to_playlist {
            actions.push_str(PLAYLIST_MARKER);
        }
        actions
    }

    /// Markers, a separating space when there are any, then the track link.
    pub fn render(&self) -> String {
        let actions = self.markers();
        let link = utils::track_link(&self.title, self.href.as_deref());
        if actions.is_empty() {
            link
        } else {
            format!("{} {}", actions, link)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveResult {
    NothingPlaying,
    Saved(SaveOutcome),
}

/// Saves whatever the user is listening to.
///
/// Nothing playing, a paused player, or an item without an id (local files)
/// all end in [`SaveResult::NothingPlaying`] without touching the library.
///
/// # Errors
///
/// The first failing API call aborts the operation; see
/// [`Error::requires_login`](crate::error::Error::requires_login) for how
/// callers classify it.
pub async fn save_current_track(client: &SpotifyClient, playlist_id: &str) -> Result<SaveResult> {
    let Some(playing) = client.currently_playing().await? else {
        return Ok(SaveResult::NothingPlaying);
    };
    let Some(item) = playing.playing_item() else {
        return Ok(SaveResult::NothingPlaying);
    };
    let Some(track_id) = item.id.as_deref() else {
        return Ok(SaveResult::NothingPlaying);
    };

    let mut liked = false;
    if !client.saved_tracks_contains(track_id).await? {
        client.saved_tracks_add(track_id).await?;
        liked = true;
    }

    let mut added_to_playlist = false;
    if !client.playlist_contains_track(playlist_id, track_id).await? {
        client.add_tracks_to_playlist(playlist_id, &[track_id]).await?;
        added_to_playlist = true;
    }

    Ok(SaveResult::Saved(SaveOutcome {
        liked,
        added_to_playlist,
        title: utils::track_title(item),
        href: item.external_urls.spotify.clone(),
    }))
}
