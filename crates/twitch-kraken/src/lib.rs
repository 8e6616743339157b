//! Twitch Kraken (v3) client library.
//!
//! Provides typed access to the channels, chat, games, ingests, search,
//! streams, teams, users and videos endpoints, the legacy `api` host, and
//! HLS playlist retrieval from usher.

pub mod api;
mod auth;
pub mod config;

pub use api::{BaseUrl, Endpoints, HlsPlaylist, KrakenClient, ListOptions, M3U8Options};
pub use config::AppInfo;

/// Unified error type for the twitch-kraken crate.
#[derive(Debug, thiserror::Error)]
pub enum TwitchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("api error, response code: {status}")]
    Status { status: u16 },

    #[error("query encoding error: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("invalid header value for {0}")]
    InvalidHeader(&'static str),
}
