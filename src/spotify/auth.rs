use reqwest::StatusCode;

use super::SpotifyClient;
use crate::{error::SpotifyError, types::TokenResponse};

impl SpotifyClient {
    /// Exchanges the configured refresh token for a fresh access token.
    ///
    /// Posts the `refresh_token` grant with client id and secret as form
    /// fields. Only the access token is returned; a rotated refresh token in
    /// the response is ignored and the configured one stays in use.
    ///
    /// # Errors
    ///
    /// - [`SpotifyError::Http`] on network failure or an unreadable body
    /// - [`SpotifyError::Status`] when the accounts service answers non-2xx
    /// - [`SpotifyError::Malformed`] when the body carries no access token
    pub async fn refresh_access_token(&self) -> Result<String, SpotifyError> {
        let res = self
            .http
            .post(&self.token_url)
            .form(&[
                ("client_id", self.credentials.client_id.as_str()),
                ("client_secret", self.credentials.client_secret.as_str()),
                ("grant_type", "refresh_token"),
                ("refresh_token", self.credentials.refresh_token.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        if status != StatusCode::OK {
            return Err(SpotifyError::Status {
                endpoint: self.token_url.clone(),
                status: status.as_u16(),
            });
        }

        let token: TokenResponse = res.json().await?;
        token
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| SpotifyError::Malformed {
                endpoint: self.token_url.clone(),
                message: "missing access_token".to_string(),
            })
    }
}
