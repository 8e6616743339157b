use super::models::{Team, Teams as TeamList};
use super::*;

pub struct Teams<'a> {
    pub(super) client: &'a KrakenClient,
}

impl Teams<'_> {
    /// All active teams.
    pub async fn list(&self, opt: Option<&ListOptions>) -> Result<TeamList, TwitchError> {
        let path = with_query("teams".to_string(), opt)?;
        self.client.get_json(BaseUrl::Kraken, &path).await
    }

    pub async fn team(&self, name: &str) -> Result<Team, TwitchError> {
        let path = format!("teams/{name}");
        self.client.get_json(BaseUrl::Kraken, &path).await
    }
}
