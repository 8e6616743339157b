use super::models::{
    AccessToken, Channel, Editors, Follows, Panel, Subscription, Subscriptions, Videos,
};
use super::*;

/// Channel endpoints, `/kraken/channels` plus the legacy panels and
/// access-token routes and the usher playlist.
pub struct Channels<'a> {
    pub(super) client: &'a KrakenClient,
}

/// An HLS master playlist and the query parameters that fetched it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HlsPlaylist {
    pub body: String,
    /// Effective parameters after the playlist overrides, `None` when the
    /// request carried no query string.
    pub params: Option<M3U8Options>,
}

impl Channels<'_> {
    /// Get a channel by name. An empty `name` returns the authenticated
    /// user's channel.
    pub async fn channel(&self, name: &str) -> Result<Channel, TwitchError> {
        self.client.get_json(BaseUrl::Kraken, &channel_path(name)).await
    }

    /// Users who are editors of the channel. Requires `channel_read`.
    pub async fn editors(&self, name: &str) -> Result<Editors, TwitchError> {
        let path = format!("channels/{name}/editors");
        self.client.get_json(BaseUrl::Kraken, &path).await
    }

    /// Videos ordered by creation time, most recent first.
    pub async fn videos(
        &self,
        name: &str,
        opt: Option<&ListOptions>,
    ) -> Result<Videos, TwitchError> {
        let path = with_query(format!("channels/{name}/videos"), opt)?;
        self.client.get_json(BaseUrl::Kraken, &path).await
    }

    /// Users following the channel.
    pub async fn follows(
        &self,
        name: &str,
        opt: Option<&ListOptions>,
    ) -> Result<Follows, TwitchError> {
        let path = with_query(format!("channels/{name}/follows"), opt)?;
        self.client.get_json(BaseUrl::Kraken, &path).await
    }

    /// Subscribers of the channel. Requires `channel_subscriptions`.
    pub async fn subscriptions(
        &self,
        name: &str,
        opt: Option<&ListOptions>,
    ) -> Result<Subscriptions, TwitchError> {
        let path = with_query(format!("channels/{name}/subscriptions"), opt)?;
        self.client.get_json(BaseUrl::Kraken, &path).await
    }

    /// A single user's subscription to the channel.
    pub async fn subscription(&self, name: &str, user: &str) -> Result<Subscription, TwitchError> {
        let path = format!("channels/{name}/subscriptions/{user}");
        self.client.get_json(BaseUrl::Kraken, &path).await
    }

    /// Profile panels, from the legacy `api` host.
    pub async fn panels(
        &self,
        name: &str,
        opt: Option<&ListOptions>,
    ) -> Result<Vec<Panel>, TwitchError> {
        let path = with_query(format!("channels/{name}/panels"), opt)?;
        self.client.get_json(BaseUrl::Legacy, &path).await
    }

    /// Token and signature for requesting the channel's HLS playlist.
    pub async fn access_token(&self, name: &str) -> Result<AccessToken, TwitchError> {
        let path = format!("channels/{name}/access_token");
        self.client.get_json(BaseUrl::Legacy, &path).await
    }

    /// Fetch the HLS master playlist from usher.
    ///
    /// Only `token` and `sig` are taken from `opt`; `player`,
    /// `allow_audio_only`, `allow_source`, `kind` and `random` are replaced
    /// by [`M3U8Options::with_playlist_overrides`]. The values actually sent
    /// are returned in [`HlsPlaylist::params`].
    pub async fn m3u8(
        &self,
        name: &str,
        opt: Option<M3U8Options>,
    ) -> Result<HlsPlaylist, TwitchError> {
        let params = opt.map(M3U8Options::with_playlist_overrides);
        let mut path = format!("channel/hls/{name}.m3u8");
        if let Some(p) = &params {
            path.push('?');
            path.push_str(&p.to_query()?);
        }

        let body = self.client.get_text(BaseUrl::Usher, &path).await?;
        tracing::debug!(channel = name, bytes = body.len(), "Fetched HLS playlist");
        Ok(HlsPlaylist { body, params })
    }
}

fn channel_path(name: &str) -> String {
    if name.is_empty() {
        "channel".to_string()
    } else {
        format!("channels/{name}")
    }
}
