use crate::{error::Result, spotify::SpotifyClient};

impl SpotifyClient {
    /// Whether the track is in the user's liked songs.
    ///
    /// # Arguments
    ///
    /// * `track_id` - Spotify track id, not the `spotify:track:` URI
    ///
    /// # API Documentation
    ///
    /// `GET /me/tracks/contains?ids=<id>` answers with one flag per id.
    pub async fn saved_tracks_contains(&self, track_id: &str) -> Result<bool> {
        let flags = self
            .http
            .get(self.endpoint("/me/tracks/contains"))
            .query(&[("ids", track_id)])
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<bool>>()
            .await?;

        Ok(flags.first().copied().unwrap_or(false))
    }

    /// Adds the track to the user's liked songs.
    ///
    /// Saving a track that is already liked is a no-op on Spotify's side, but
    /// callers check [`saved_tracks_contains`](Self::saved_tracks_contains)
    /// first so they can report what changed.
    ///
    /// # Errors
    ///
    /// [`Error::Api`](crate::error::Error::Api) when the request fails or the
    /// token lacks the `user-library-modify` scope.
    pub async fn saved_tracks_add(&self, track_id: &str) -> Result<()> {
        self.http
            .put(self.endpoint("/me/tracks"))
            .query(&[("ids", track_id)])
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
