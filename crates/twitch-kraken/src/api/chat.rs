use super::models::{ChatBadges, ChatLinks, Emoticons};
use super::*;

/// Chat endpoints under `/kraken/chat`.
pub struct Chat<'a> {
    pub(super) client: &'a KrakenClient,
}

impl Chat<'_> {
    /// Links to the channel's chat resources.
    pub async fn links(&self, name: &str) -> Result<ChatLinks, TwitchError> {
        let path = format!("chat/{name}");
        self.client.get_json(BaseUrl::Kraken, &path).await
    }

    /// Every emoticon on Twitch. The response is large.
    pub async fn emoticons(&self) -> Result<Emoticons, TwitchError> {
        self.client.get_json(BaseUrl::Kraken, "chat/emoticons").await
    }

    pub async fn badges(&self, name: &str) -> Result<ChatBadges, TwitchError> {
        let path = format!("chat/{name}/badges");
        self.client.get_json(BaseUrl::Kraken, &path).await
    }
}
