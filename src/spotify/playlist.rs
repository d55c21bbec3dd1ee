use crate::{
    error::Result,
    spotify::SpotifyClient,
    types::{AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, PlaylistTracksPage},
};

/// Only the track ids and the cursor are needed for a membership check.
pub const PLAYLIST_TRACK_FIELDS: &str = "items(track(id)),next";
/// Largest page Spotify serves for playlist items.
pub const PLAYLIST_PAGE_LIMIT: u32 = 100;

impl SpotifyClient {
    /// First page of a playlist's tracks, trimmed to ids.
    pub async fn playlist_tracks(&self, playlist_id: &str) -> Result<PlaylistTracksPage> {
        let limit = PLAYLIST_PAGE_LIMIT.to_string();
        let page = self
            .http
            .get(self.endpoint(&format!("/playlists/{id}/tracks", id = playlist_id)))
            .query(&[("fields", PLAYLIST_TRACK_FIELDS), ("limit", limit.as_str())])
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?
            .json::<PlaylistTracksPage>()
            .await?;

        Ok(page)
    }

    /// Follows a `next` cursor. The cursor is an absolute URL from Spotify.
    pub async fn next_page(&self, next: &str) -> Result<PlaylistTracksPage> {
        let page = self
            .http
            .get(next)
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?
            .json::<PlaylistTracksPage>()
            .await?;

        Ok(page)
    }

    /// Walks the playlist page by page until the track turns up or the pages
    /// run out. Stops fetching as soon as a page contains the track.
    ///
    /// # Arguments
    ///
    /// * `playlist_id` - Playlist to search
    /// * `track_id` - Track to look for
    ///
    /// # Returns
    ///
    /// `Ok(true)` after fetching exactly the pages up to and including the one
    /// holding the track, `Ok(false)` after fetching all of them.
    ///
    /// # Errors
    ///
    /// The first failing page request aborts the walk.
    pub async fn playlist_contains_track(&self, playlist_id: &str, track_id: &str) -> Result<bool> {
        let mut page = self.playlist_tracks(playlist_id).await?;

        loop {
            if page.contains(track_id) {
                return Ok(true);
            }

            match page.next.take() {
                Some(next) => page = self.next_page(&next).await?,
                None => return Ok(false),
            }
        }
    }

    /// Appends tracks to the playlist.
    ///
    /// # Arguments
    ///
    /// * `playlist_id` - Target playlist, the user must be allowed to edit it
    /// * `track_ids` - Track ids; they are sent as `spotify:track:<id>` URIs
    ///
    /// # Returns
    ///
    /// The playlist's new snapshot id.
    pub async fn add_tracks_to_playlist(
        &self,
        playlist_id: &str,
        track_ids: &[&str],
    ) -> Result<AddTrackToPlaylistResponse> {
        let body = AddTrackToPlaylistRequest {
            uris: track_ids
                .iter()
                .map(|id| format!("spotify:track:{}", id))
                .collect(),
        };

        let response = self
            .http
            .post(self.endpoint(&format!("/playlists/{id}/tracks", id = playlist_id)))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<AddTrackToPlaylistResponse>()
            .await?;

        Ok(response)
    }
}
