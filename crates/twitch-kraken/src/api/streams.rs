use super::models::{ChannelStream, FeaturedStreams, StreamSummary, Streams as StreamList};
use super::*;

/// Stream endpoints under `/kraken/streams`.
pub struct Streams<'a> {
    pub(super) client: &'a KrakenClient,
}

impl Streams<'_> {
    /// The channel's live stream. Check [`ChannelStream::is_live`] for
    /// offline channels.
    pub async fn channel(&self, name: &str) -> Result<ChannelStream, TwitchError> {
        let path = format!("streams/{name}");
        self.client.get_json(BaseUrl::Kraken, &path).await
    }

    /// Live streams, filtered by `game`, `channel`, `embeddable` or `hls`.
    pub async fn list(&self, opt: Option<&ListOptions>) -> Result<StreamList, TwitchError> {
        let path = with_query("streams".to_string(), opt)?;
        self.client.get_json(BaseUrl::Kraken, &path).await
    }

    pub async fn featured(
        &self,
        opt: Option<&ListOptions>,
    ) -> Result<FeaturedStreams, TwitchError> {
        let path = with_query("streams/featured".to_string(), opt)?;
        self.client.get_json(BaseUrl::Kraken, &path).await
    }

    /// Global (or per-`game`) viewer and channel counts.
    pub async fn summary(&self, opt: Option<&ListOptions>) -> Result<StreamSummary, TwitchError> {
        let path = with_query("streams/summary".to_string(), opt)?;
        self.client.get_json(BaseUrl::Kraken, &path).await
    }

    /// Live streams the authenticated user follows. Requires `user_read`.
    pub async fn followed(&self, opt: Option<&ListOptions>) -> Result<StreamList, TwitchError> {
        let path = with_query("streams/followed".to_string(), opt)?;
        self.client.get_json(BaseUrl::Kraken, &path).await
    }
}
