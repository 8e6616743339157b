//! OAuth authorization URL generation.
//!
//! Exchanging the returned code for a token happens outside this crate;
//! hand the resulting token to [`KrakenClient::set_access_token`].
//!
//! [`KrakenClient::set_access_token`]: crate::KrakenClient::set_access_token

use url::Url;

use crate::{AppInfo, TwitchError};

const AUTHORIZE_URL: &str = "https://api.twitch.tv/kraken/oauth2/authorize";

impl AppInfo {
    /// Build the URL the user is sent to for the authorization-code flow.
    pub fn authorize_url(&self) -> Result<String, TwitchError> {
        let mut url = Url::parse(AUTHORIZE_URL)?;
        {
            let mut q = url.query_pairs_mut();
            q.append_pair("response_type", "code")
                .append_pair("client_id", &self.client_id)
                .append_pair("redirect_uri", &self.redirect_uri)
                .append_pair("scope", &self.scope);
            if !self.state.is_empty() {
                q.append_pair("state", &self.state);
            }
        }
        Ok(url.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorize_url_generation() {
        let app = AppInfo {
            client_id: "test_client_id".into(),
            client_secret: "test_secret".into(),
            state: "abc123".into(),
            redirect_uri: "http://localhost:8080/callback".into(),
            scope: "user_read channel_read".into(),
        };
        let url = app.authorize_url().unwrap();

        assert!(url.starts_with(AUTHORIZE_URL));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("client_id=test_client_id"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A8080%2Fcallback"));
        assert!(url.contains("scope=user_read+channel_read"));
        assert!(url.contains("state=abc123"));
        assert!(!url.contains("test_secret"));
    }

    #[test]
    fn test_authorize_url_omits_empty_state() {
        let app = AppInfo::new("id");
        let url = app.authorize_url().unwrap();
        assert!(!url.contains("state="));
    }
}
