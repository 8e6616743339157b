use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use url::Url;

use super::*;

const ACCEPT_V2: &str = "application/vnd.twitchtv.v2+json";

impl KrakenClient {
    /// Resolve `path` against the root of `base` using URL reference rules.
    pub(super) fn resolve(&self, base: BaseUrl, path: &str) -> Result<Url, TwitchError> {
        Ok(self.endpoints.get(base).join(path)?)
    }

    /// Build request headers for the JSON hosts. `Client-ID` and
    /// `Authorization` are only present when configured. Usher requests
    /// carry no headers.
    pub(super) fn headers(&self, base: BaseUrl) -> Result<HeaderMap, TwitchError> {
        let mut headers = HeaderMap::new();
        if !base.is_json() {
            return Ok(headers);
        }
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_V2));
        if !self.app.client_id.is_empty() {
            let value = HeaderValue::from_str(&self.app.client_id)
                .map_err(|_| TwitchError::InvalidHeader("Client-ID"))?;
            headers.insert("Client-ID", value);
        }
        if !self.access_token.is_empty() {
            let value = HeaderValue::from_str(&format!("OAuth {}", self.access_token))
                .map_err(|_| TwitchError::InvalidHeader("Authorization"))?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    /// Issue a GET and check the status. 200 and 304 pass; anything else
    /// becomes [`TwitchError::Status`] without reading the body.
    pub(super) async fn send(
        &self,
        base: BaseUrl,
        path: &str,
    ) -> Result<reqwest::Response, TwitchError> {
        let url = self.resolve(base, path)?;
        let headers = self.headers(base)?;

        tracing::debug!(?base, url = %url, "Kraken GET");
        let resp = self.http.get(url).headers(headers).send().await?;

        let status = resp.status();
        if status != StatusCode::OK && status != StatusCode::NOT_MODIFIED {
            tracing::debug!(?base, status = status.as_u16(), "Kraken request rejected");
            return Err(TwitchError::Status {
                status: status.as_u16(),
            });
        }

        Ok(resp)
    }

    /// GET a JSON resource and decode it into `T`.
    pub(super) async fn get_json<T: DeserializeOwned>(
        &self,
        base: BaseUrl,
        path: &str,
    ) -> Result<T, TwitchError> {
        let body = self.send(base, path).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// GET a resource and return the body as text.
    pub(super) async fn get_text(&self, base: BaseUrl, path: &str) -> Result<String, TwitchError> {
        Ok(self.send(base, path).await?.text().await?)
    }
}
