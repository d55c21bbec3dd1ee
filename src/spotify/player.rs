use reqwest::StatusCode;

use crate::{error::Result, spotify::SpotifyClient, types::CurrentlyPlaying};

impl SpotifyClient {
    /// Retrieves the user's playback state.
    ///
    /// Spotify answers `204 No Content` when no device is active; that maps to
    /// `Ok(None)`. A paused player still returns `Some` with
    /// `is_playing == false`.
    ///
    /// # Returns
    ///
    /// - `Ok(None)` - No active device
    /// - `Ok(Some(state))` - Player state; use
    ///   [`CurrentlyPlaying::playing_item`] to ignore paused players
    ///
    /// # Errors
    ///
    /// [`Error::Api`](crate::error::Error::Api) on an error status (401 for an
    /// expired token), [`Error::Serde`](crate::error::Error::Serde) when the
    /// body is not a playback state.
    pub async fn currently_playing(&self) -> Result<Option<CurrentlyPlaying>> {
        let response = self
            .http
            .get(self.endpoint("/me/player/currently-playing"))
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?;

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(None);
        }

        Ok(Some(serde_json::from_slice(&bytes)?))
    }
}
