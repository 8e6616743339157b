use serde::Serialize;

use super::models::AccessToken;
use crate::TwitchError;

/// Paging and filter parameters shared by the list endpoints.
///
/// Fields at their zero value (empty string, `0`, `None`) are left out of
/// the query string. Fields are declared in key order so the encoded query
/// is sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListOptions {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub channel: String,
    /// `asc` or `desc`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub direction: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeddable: Option<bool>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub game: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hls: Option<bool>,
    #[serde(skip_serializing_if = "is_zero")]
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live: Option<bool>,
    #[serde(skip_serializing_if = "is_zero")]
    pub offset: u32,
    /// `week`, `month` or `all`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub period: String,
}

impl ListOptions {
    pub fn paged(limit: u32, offset: u32) -> Self {
        Self {
            limit,
            offset,
            ..Self::default()
        }
    }

    /// Form-encode the set fields.
    pub fn to_query(&self) -> Result<String, TwitchError> {
        Ok(serde_urlencoded::to_string(self)?)
    }
}

/// Query parameters for an usher HLS playlist request.
///
/// [`Channels::m3u8`](super::Channels::m3u8) overwrites `player`,
/// `allow_audio_only`, `allow_source`, `kind` and `random`; only `token`
/// and `sig` are taken from the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct M3U8Options {
    #[serde(rename = "$allow_audio_only")]
    pub allow_audio_only: bool,
    pub allow_source: bool,
    #[serde(rename = "p", skip_serializing_if = "is_zero")]
    pub random: u64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub player: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sig: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub token: String,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub kind: String,
}

const PLAYLIST_PLAYER: &str = "twitchweb";
const PLAYLIST_TYPE: &str = "any";

impl M3U8Options {
    /// Options carrying the signed token from
    /// [`Channels::access_token`](super::Channels::access_token).
    pub fn from_access_token(token: &AccessToken) -> Self {
        Self {
            token: token.token.clone(),
            sig: token.sig.clone(),
            ..Self::default()
        }
    }

    /// Apply the values usher requires regardless of what the caller set:
    /// audio-only and source quality allowed, stream type `any`, player
    /// `twitchweb`, and a fresh non-zero cache-busting `p`.
    pub fn with_playlist_overrides(mut self) -> Self {
        self.allow_audio_only = true;
        self.allow_source = true;
        self.kind = PLAYLIST_TYPE.to_string();
        self.random = u64::from(rand::random::<u32>()) + 1;
        self.player = PLAYLIST_PLAYER.to_string();
        self
    }

    /// Form-encode. The two `allow` flags are always present.
    pub fn to_query(&self) -> Result<String, TwitchError> {
        Ok(serde_urlencoded::to_string(self)?)
    }
}

fn is_zero<T: Default + PartialEq>(v: &T) -> bool {
    *v == T::default()
}
