//! Twitch Kraken REST API client.
//!
//! Every endpoint method builds a path relative to one of three hosts
//! ([`BaseUrl`]), issues a GET with `Accept`, `Client-ID` and
//! `Authorization` headers as configured, and decodes the JSON body.

mod channels;
mod chat;
mod games;
mod ingests;
mod query;
mod request;
mod search;
mod streams;
mod teams;
mod users;
mod videos;

pub mod models;

pub use channels::{Channels, HlsPlaylist};
pub use chat::Chat;
pub use games::Games;
pub use ingests::Ingests;
pub use query::{ListOptions, M3U8Options};
pub use search::Search;
pub use streams::Streams;
pub use teams::Teams;
pub use users::Users;
pub use videos::Videos;

use url::Url;

use crate::{AppInfo, TwitchError};

const KRAKEN_BASE: &str = "https://api.twitch.tv/kraken/";
const LEGACY_BASE: &str = "https://api.twitch.tv/api/";
const USHER_BASE: &str = "https://usher.ttvnw.net/api/";

/// The host a request is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseUrl {
    /// `api.twitch.tv/kraken/`, the primary JSON API.
    Kraken,
    /// `api.twitch.tv/api/`, panels and playlist access tokens.
    Legacy,
    /// `usher.ttvnw.net/api/`, HLS playlists (plain text).
    Usher,
}

impl BaseUrl {
    pub const ALL: [BaseUrl; 3] = [BaseUrl::Kraken, BaseUrl::Legacy, BaseUrl::Usher];

    /// Whether this host serves JSON. Only JSON hosts get the versioned
    /// `Accept` header and credentials.
    pub fn is_json(self) -> bool {
        match self {
            BaseUrl::Kraken | BaseUrl::Legacy => true,
            BaseUrl::Usher => false,
        }
    }
}

/// Resolved root URL for each [`BaseUrl`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub kraken: Url,
    pub legacy: Url,
    pub usher: Url,
}

impl Endpoints {
    pub fn get(&self, base: BaseUrl) -> &Url {
        match base {
            BaseUrl::Kraken => &self.kraken,
            BaseUrl::Legacy => &self.legacy,
            BaseUrl::Usher => &self.usher,
        }
    }

    /// Point all three bases at paths under a single root, e.g. a local
    /// test server or a proxy: `{root}kraken/`, `{root}api/`, `{root}usher/`.
    pub fn under(root: &Url) -> Result<Self, TwitchError> {
        Ok(Self {
            kraken: root.join("kraken/")?,
            legacy: root.join("api/")?,
            usher: root.join("usher/")?,
        })
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        let parse = |s: &str| Url::parse(s).expect("constant base url");
        Self {
            kraken: parse(KRAKEN_BASE),
            legacy: parse(LEGACY_BASE),
            usher: parse(USHER_BASE),
        }
    }
}

/// Twitch Kraken API client.
///
/// Holds an immutable snapshot of the credentials; clone it or wrap it in
/// an `Arc` to share across tasks.
#[derive(Debug, Clone)]
pub struct KrakenClient {
    pub(super) http: reqwest::Client,
    pub(super) app: AppInfo,
    pub(super) access_token: String,
    pub(super) endpoints: Endpoints,
}

impl KrakenClient {
    pub fn new(app: AppInfo) -> Self {
        Self::with_http(reqwest::Client::new(), app)
    }

    /// Use a caller-configured HTTP client (timeouts, proxies, pooling).
    pub fn with_http(http: reqwest::Client, app: AppInfo) -> Self {
        Self {
            http,
            app,
            access_token: String::new(),
            endpoints: Endpoints::default(),
        }
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = token.into();
        self
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Replace the OAuth token. An empty token stops the `Authorization`
    /// header from being sent.
    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.access_token = token.into();
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn app_info(&self) -> &AppInfo {
        &self.app
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn channels(&self) -> Channels<'_> {
        Channels { client: self }
    }

    pub fn chat(&self) -> Chat<'_> {
        Chat { client: self }
    }

    pub fn games(&self) -> Games<'_> {
        Games { client: self }
    }

    pub fn ingests(&self) -> Ingests<'_> {
        Ingests { client: self }
    }

    pub fn search(&self) -> Search<'_> {
        Search { client: self }
    }

    pub fn streams(&self) -> Streams<'_> {
        Streams { client: self }
    }

    pub fn teams(&self) -> Teams<'_> {
        Teams { client: self }
    }

    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }

    pub fn videos(&self) -> Videos<'_> {
        Videos { client: self }
    }
}

/// Append `?query` to `path` when `opt` is present and encodes to
/// something non-empty.
pub(super) fn with_query(
    mut path: String,
    opt: Option<&ListOptions>,
) -> Result<String, TwitchError> {
    let query = match opt {
        Some(opt) => opt.to_query()?,
        None => return Ok(path),
    };
    if !query.is_empty() {
        path.push(if path.contains('?') { '&' } else { '?' });
        path.push_str(&query);
    }
    Ok(path)
}
