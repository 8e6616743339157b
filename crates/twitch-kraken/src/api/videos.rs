use super::models::{Video, Videos as VideoList};
use super::*;

pub struct Videos<'a> {
    pub(super) client: &'a KrakenClient,
}

impl Videos<'_> {
    pub async fn video(&self, id: &str) -> Result<Video, TwitchError> {
        let path = format!("videos/{id}");
        self.client.get_json(BaseUrl::Kraken, &path).await
    }

    /// Most viewed videos, filtered by `game` and `period`.
    pub async fn top(&self, opt: Option<&ListOptions>) -> Result<VideoList, TwitchError> {
        let path = with_query("videos/top".to_string(), opt)?;
        self.client.get_json(BaseUrl::Kraken, &path).await
    }

    /// Videos from channels the authenticated user follows.
    pub async fn followed(&self, opt: Option<&ListOptions>) -> Result<VideoList, TwitchError> {
        let path = with_query("videos/followed".to_string(), opt)?;
        self.client.get_json(BaseUrl::Kraken, &path).await
    }
}
