use url::form_urlencoded;

use super::models::{SearchChannels, SearchGames, Streams as StreamList};
use super::*;

/// Search endpoints under `/kraken/search`.
pub struct Search<'a> {
    pub(super) client: &'a KrakenClient,
}

impl Search<'_> {
    /// Channels whose name or game matches `query`.
    pub async fn channels(
        &self,
        query: &str,
        opt: Option<&ListOptions>,
    ) -> Result<SearchChannels, TwitchError> {
        let path = with_query(search_path("channels", query), opt)?;
        self.client.get_json(BaseUrl::Kraken, &path).await
    }

    /// Live streams matching `query`.
    pub async fn streams(
        &self,
        query: &str,
        opt: Option<&ListOptions>,
    ) -> Result<StreamList, TwitchError> {
        let path = with_query(search_path("streams", query), opt)?;
        self.client.get_json(BaseUrl::Kraken, &path).await
    }

    /// Game name suggestions. With `live` set, only games with live
    /// streams are returned.
    pub async fn games(&self, query: &str, live: Option<bool>) -> Result<SearchGames, TwitchError> {
        let opt = ListOptions {
            live,
            ..ListOptions::default()
        };
        let path = format!("{}&type=suggest", search_path("games", query));
        let path = with_query(path, Some(&opt))?;
        self.client.get_json(BaseUrl::Kraken, &path).await
    }
}

fn search_path(kind: &str, query: &str) -> String {
    let q = form_urlencoded::Serializer::new(String::new())
        .append_pair("q", query)
        .finish();
    format!("search/{kind}?{q}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_path_encodes_query() {
        assert_eq!(search_path("streams", "star craft"), "search/streams?q=star+craft");
        assert_eq!(search_path("channels", "a&b"), "search/channels?q=a%26b");
    }

    #[test]
    fn search_options_follow_query() {
        let opt = ListOptions::paged(5, 0);
        let path = with_query(search_path("streams", "dota"), Some(&opt)).unwrap();
        assert_eq!(path, "search/streams?q=dota&limit=5");
    }
}
