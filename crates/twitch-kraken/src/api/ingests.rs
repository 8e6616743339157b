use super::models::Ingests as IngestList;
use super::*;

pub struct Ingests<'a> {
    pub(super) client: &'a KrakenClient,
}

impl Ingests<'_> {
    /// RTMP ingest servers available for broadcasting.
    pub async fn list(&self) -> Result<IngestList, TwitchError> {
        self.client.get_json(BaseUrl::Kraken, "ingests").await
    }
}
