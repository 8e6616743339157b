use super::models::TopGames;
use super::*;

pub struct Games<'a> {
    pub(super) client: &'a KrakenClient,
}

impl Games<'_> {
    /// Games sorted by number of current viewers, most popular first.
    pub async fn top(&self, opt: Option<&ListOptions>) -> Result<TopGames, TwitchError> {
        let path = with_query("games/top".to_string(), opt)?;
        self.client.get_json(BaseUrl::Kraken, &path).await
    }
}
