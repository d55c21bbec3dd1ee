use crate::{error::Result, spotify::SpotifyClient, types::UserProfile};

impl SpotifyClient {
    /// Profile of the user the token belongs to.
    ///
    /// Only the id is used; it becomes the key of the cached token record.
    ///
    /// # Errors
    ///
    /// [`Error::Api`](crate::error::Error::Api) for transport failures and
    /// error statuses, e.g. 403 for users outside a development-mode app's
    /// allow list.
    pub async fn me(&self) -> Result<UserProfile> {
        let profile = self
            .http
            .get(self.endpoint("/me"))
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?
            .json::<UserProfile>()
            .await?;

        Ok(profile)
    }
}
