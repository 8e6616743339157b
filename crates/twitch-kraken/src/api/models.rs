//! Response shapes for the Kraken v3 endpoints.
//!
//! Missing or `null` fields decode to the type's zero value. Fields the
//! API treats as optional are skipped on serialize when zero; fields it
//! always returns (and nested objects) are always written.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

fn is_zero<T: Default + PartialEq>(v: &T) -> bool {
    *v == T::default()
}

/// Decode `null` as `T::default()`.
fn null_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Core objects
// ---------------------------------------------------------------------------

/// Channel object from GET /channels/:channel and GET /channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Channel {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub name: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub status: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub game: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub delay: i64,
    #[serde(rename = "_id", skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub id: i64,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub created_at: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub updated_at: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub primary_team_name: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub primary_team_display_name: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub teams: Vec<Team>,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub title: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub mature: bool,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub abuse_reported: bool,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub banner: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub video_banner: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub views: i64,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub followers: i64,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub background: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub profile_banner: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub profile_banner_background_color: String,
    #[serde(rename = "_links", deserialize_with = "null_default")]
    pub links: ChannelLinks,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub logo: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub url: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub display_name: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub language: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub broadcaster_language: String,

    // Only returned for the authenticated channel.
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub stream_key: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub login: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub email: String,
}

/// Team object from GET /teams/:team.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    #[serde(rename = "_id", skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub id: i64,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub name: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub background: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub banner: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub logo: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub info: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub display_name: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub created_at: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub updated_at: String,
}

/// Live stream object from GET /streams/:channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stream {
    #[serde(rename = "_id", skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub id: i64,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub game: String,
    #[serde(deserialize_with = "null_default")]
    pub preview: Preview,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub viewers: i64,
    #[serde(deserialize_with = "null_default")]
    pub channel: Channel,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub video_height: i64,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub average_fps: f64,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub delay: i64,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub broadcast_platform: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub community_id: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub community_ids: Vec<String>,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_default")]
    pub is_playlist: bool,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub stream_type: String,
}

/// User object from GET /users/:user and GET /user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub name: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub logo: String,
    #[serde(rename = "_id", skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub id: i64,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub display_name: String,
    #[serde(rename = "type", skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub bio: String,
    #[serde(deserialize_with = "null_default")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "null_default")]
    pub updated_at: DateTime<Utc>,
}

/// Video object from GET /videos/:id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub title: String,
    #[serde(rename = "_id", skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub id: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub embed: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub url: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub views: i64,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub preview: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub length: i64,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub description: String,
    #[serde(deserialize_with = "null_default")]
    pub broadcast_id: i64,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub recorded_at: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub game: String,
    #[serde(deserialize_with = "null_default")]
    pub channel: Channel,
}

/// Entry of GET /streams/featured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturedStream {
    #[serde(deserialize_with = "null_default")]
    pub stream: Stream,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub text: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub next: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelLinks {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub chat: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub commercial: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub videos: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub teams: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub editors: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub subscriptions: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub features: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub stream_key: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub follows: String,
}

/// Thumbnail URLs at several sizes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preview {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub small: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub medium: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub large: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub template: String,
}

// ---------------------------------------------------------------------------
// Channels
// ---------------------------------------------------------------------------

/// GET /channels/:channel/videos, GET /videos/top, GET /videos/followed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Videos {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub videos: Vec<Video>,
    #[serde(rename = "_links", deserialize_with = "null_default")]
    pub links: Links,
}

/// GET /channels/:channel/editors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Editors {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub users: Vec<User>,
    #[serde(rename = "_links", deserialize_with = "null_default")]
    pub links: Links,
}

/// GET /channels/:channel/follows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Follows {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub follows: Vec<Follow>,
    #[serde(rename = "_total", skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub total: i64,
    #[serde(rename = "_links", deserialize_with = "null_default")]
    pub links: Links,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Follow {
    #[serde(deserialize_with = "null_default")]
    pub user: User,
}

/// Content of a profile panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelData {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub link: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub image: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub title: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub description: String,
}

/// Profile panel from GET /api/channels/:channel/panels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Panel {
    #[serde(rename = "_id", skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub id: i64,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub display_order: i64,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub html_description: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub user_id: i64,
    #[serde(deserialize_with = "null_default")]
    pub data: PanelData,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub channel: String,
}

/// GET /channels/:channel/subscriptions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscriptions {
    #[serde(rename = "_total", skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub total: i64,
    #[serde(rename = "_links", deserialize_with = "null_default")]
    pub links: Links,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub subscriptions: Vec<Subscription>,
}

/// GET /channels/:channel/subscriptions/:user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscription {
    #[serde(rename = "_id", skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub user: User,
}

/// Playlist signing token from GET /api/channels/:channel/access_token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessToken {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub sig: String,
    #[serde(deserialize_with = "null_default")]
    pub mobile_restricted: bool,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub token: String,
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

/// GET /chat/:channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatLinks {
    #[serde(rename = "_links", deserialize_with = "null_default")]
    pub links: ChatLinkSet,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatLinkSet {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub emoticons: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub badges: String,
}

/// GET /chat/emoticons.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Emoticons {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub emoticons: Vec<Emoticon>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Emoticon {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub regex: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub images: Vec<EmoticonImage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmoticonImage {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub emoticon_set: i64,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub height: i64,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub width: i64,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub url: String,
}

/// GET /chat/:channel/badges. A badge the channel lacks (usually
/// `subscriber`) decodes as an empty [`Badge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatBadges {
    #[serde(deserialize_with = "null_default")]
    pub global_mod: Badge,
    #[serde(deserialize_with = "null_default")]
    pub admin: Badge,
    #[serde(deserialize_with = "null_default")]
    pub broadcaster: Badge,
    #[serde(rename = "mod", deserialize_with = "null_default")]
    pub moderator: Badge,
    #[serde(deserialize_with = "null_default")]
    pub staff: Badge,
    #[serde(deserialize_with = "null_default")]
    pub turbo: Badge,
    #[serde(deserialize_with = "null_default")]
    pub subscriber: Badge,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Badge {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub alpha: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub image: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub svg: String,
}

// ---------------------------------------------------------------------------
// Games
// ---------------------------------------------------------------------------

/// GET /games/top.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopGames {
    #[serde(rename = "_total", skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub total: i64,
    #[serde(rename = "_links", deserialize_with = "null_default")]
    pub links: Links,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub top: Vec<TopGame>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopGame {
    #[serde(deserialize_with = "null_default")]
    pub game: Game,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub viewers: i64,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub channels: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Game {
    #[serde(rename = "_id", skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub id: i64,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub name: String,
    #[serde(rename = "box", deserialize_with = "null_default")]
    pub box_art: Preview,
    #[serde(deserialize_with = "null_default")]
    pub logo: Preview,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub giantbomb_id: i64,
    /// Only set in search results.
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub popularity: i64,
}

// ---------------------------------------------------------------------------
// Ingests
// ---------------------------------------------------------------------------

/// GET /ingests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ingests {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub ingests: Vec<Ingest>,
}

/// An RTMP ingest server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ingest {
    #[serde(rename = "_id", skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub id: i64,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub name: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub default: bool,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub url_template: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub availability: f64,
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// GET /search/channels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchChannels {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub channels: Vec<Channel>,
    #[serde(rename = "_total", skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub total: i64,
    #[serde(rename = "_links", deserialize_with = "null_default")]
    pub links: Links,
}

/// GET /search/streams and GET /streams, GET /streams/followed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Streams {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub streams: Vec<Stream>,
    #[serde(rename = "_total", skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub total: i64,
    #[serde(rename = "_links", deserialize_with = "null_default")]
    pub links: Links,
}

/// GET /search/games.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchGames {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub games: Vec<Game>,
}

// ---------------------------------------------------------------------------
// Streams
// ---------------------------------------------------------------------------

/// GET /streams/:channel. `stream` is empty when the channel is offline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelStream {
    #[serde(deserialize_with = "null_default")]
    pub stream: Stream,
    #[serde(rename = "_links", deserialize_with = "null_default")]
    pub links: Links,
}

impl ChannelStream {
    pub fn is_live(&self) -> bool {
        self.stream.id != 0
    }
}

/// GET /streams/featured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturedStreams {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub featured: Vec<FeaturedStream>,
    #[serde(rename = "_links", deserialize_with = "null_default")]
    pub links: Links,
}

/// GET /streams/summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamSummary {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub viewers: i64,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub channels: i64,
}

// ---------------------------------------------------------------------------
// Teams
// ---------------------------------------------------------------------------

/// GET /teams.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Teams {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub teams: Vec<Team>,
    #[serde(rename = "_links", deserialize_with = "null_default")]
    pub links: Links,
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// GET /users/:user/follows/channels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserFollows {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub follows: Vec<UserFollow>,
    #[serde(rename = "_total", skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub total: i64,
    #[serde(rename = "_links", deserialize_with = "null_default")]
    pub links: Links,
}

/// GET /users/:user/follows/channels/:target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserFollow {
    #[serde(deserialize_with = "null_default")]
    pub channel: Channel,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub created_at: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub notifications: bool,
}

/// GET /users/:user/subscriptions/:channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSubscription {
    #[serde(rename = "_id", skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub channel: Channel,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub created_at: String,
}

/// GET /users/:user/blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Blocks {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub blocks: Vec<Block>,
    #[serde(rename = "_links", deserialize_with = "null_default")]
    pub links: Links,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Block {
    #[serde(rename = "_id", skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub user: User,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_decodes_nulls_as_zero() {
        let body = r#"{
          "mature": null,
          "status": "playing games",
          "display_name": "Test_channel",
          "game": null,
          "delay": null,
          "_id": 12345,
          "name": "test_channel",
          "created_at": "2007-05-22T10:39:54Z",
          "logo": null,
          "banner": null,
          "views": 49144894,
          "followers": 215780,
          "_links": {
            "chat": "https://api.twitch.tv/kraken/chat/test_channel",
            "videos": "https://api.twitch.tv/kraken/channels/test_channel/videos"
          }
        }"#;

        let channel: Channel = serde_json::from_str(body).unwrap();
        assert_eq!(channel.id, 12345);
        assert_eq!(channel.name, "test_channel");
        assert!(!channel.mature);
        assert_eq!(channel.game, "");
        assert_eq!(channel.delay, 0);
        assert_eq!(channel.followers, 215780);
        assert_eq!(
            channel.links.chat,
            "https://api.twitch.tv/kraken/chat/test_channel"
        );
        assert!(channel.teams.is_empty());
    }

    #[test]
    fn null_fields_of_every_kind_decode_as_zero() {
        let channel: Channel = serde_json::from_str(
            r#"{"name":"x","abuse_reported":null,"url":null,"views":null,"_links":null}"#,
        )
        .unwrap();
        assert_eq!(channel.name, "x");
        assert!(!channel.abuse_reported);
        assert_eq!(channel.url, "");
        assert_eq!(channel.views, 0);
        assert_eq!(channel.links, ChannelLinks::default());

        let user: User =
            serde_json::from_str(r#"{"created_at":null,"updated_at":null}"#).unwrap();
        assert_eq!(user.updated_at, DateTime::<Utc>::default());

        let stream: Stream = serde_json::from_str(
            r#"{"is_playlist":null,"channel":null,"preview":null,"average_fps":null}"#,
        )
        .unwrap();
        assert_eq!(stream, Stream::default());

        let video: Video =
            serde_json::from_str(r#"{"recorded_at":null,"channel":null,"url":null}"#).unwrap();
        assert_eq!(video, Video::default());

        let follows: Follows =
            serde_json::from_str(r#"{"follows":null,"_total":null,"_links":null}"#).unwrap();
        assert!(follows.follows.is_empty());
    }

    #[test]
    fn offline_stream_is_empty() {
        let body = r#"{
          "stream": null,
          "_links": { "self": "https://api.twitch.tv/kraken/streams/test_channel" }
        }"#;
        let parsed: ChannelStream = serde_json::from_str(body).unwrap();
        assert!(!parsed.is_live());
        assert_eq!(parsed.stream, Stream::default());
    }

    #[test]
    fn live_stream_embeds_channel() {
        let body = r#"{
          "stream": {
            "_id": 4989654544,
            "game": "StarCraft II",
            "viewers": 2123,
            "average_fps": 59.9,
            "is_playlist": false,
            "preview": { "small": "s.jpg", "template": "{width}x{height}.jpg" },
            "channel": { "name": "test_channel", "_id": 12345 }
          }
        }"#;
        let parsed: ChannelStream = serde_json::from_str(body).unwrap();
        assert!(parsed.is_live());
        assert_eq!(parsed.stream.viewers, 2123);
        assert_eq!(parsed.stream.channel.name, "test_channel");
        assert_eq!(parsed.stream.preview.template, "{width}x{height}.jpg");
    }

    #[test]
    fn user_timestamps_parse() {
        let body = r#"{
          "type": "user",
          "name": "test_user1",
          "created_at": "2011-06-03T17:49:19Z",
          "updated_at": "2012-06-18T17:19:57Z",
          "logo": null,
          "_id": 21229404,
          "display_name": "test_user1",
          "bio": null
        }"#;
        let user: User = serde_json::from_str(body).unwrap();
        assert_eq!(user.kind, "user");
        assert_eq!(user.created_at.to_rfc3339(), "2011-06-03T17:49:19+00:00");
        assert_eq!(user.bio, "");
    }

    #[test]
    fn missing_user_timestamps_are_epoch() {
        let user: User = serde_json::from_str(r#"{"name":"x"}"#).unwrap();
        assert_eq!(user.created_at, DateTime::<Utc>::default());
    }

    #[test]
    fn always_present_fields_serialize_when_zero() {
        let video = serde_json::to_value(Video::default()).unwrap();
        assert_eq!(video["broadcast_id"], 0);
        assert!(video.get("title").is_none());
        assert!(video.get("channel").is_some());

        let stream = serde_json::to_value(Stream::default()).unwrap();
        assert_eq!(stream["is_playlist"], false);
        assert!(stream.get("viewers").is_none());

        let token = serde_json::to_value(AccessToken::default()).unwrap();
        assert_eq!(token["mobile_restricted"], false);
        assert!(token.get("sig").is_none());
    }

    #[test]
    fn panels_decode_from_array() {
        let body = r#"[
          {
            "_id": 1,
            "display_order": 1,
            "kind": "default",
            "html_description": null,
            "user_id": 42,
            "data": { "link": "https://example.com", "title": "About" },
            "channel": "test_channel"
          },
          { "_id": 2, "display_order": 2, "kind": "default", "data": null }
        ]"#;
        let panels: Vec<Panel> = serde_json::from_str(body).unwrap();
        assert_eq!(panels.len(), 2);
        assert_eq!(panels[0].data.title, "About");
        assert_eq!(panels[1].data, PanelData::default());
    }

    #[test]
    fn chat_badges_without_subscriber() {
        let body = r#"{
          "global_mod": { "alpha": "a.png", "image": "i.png", "svg": "s.svg" },
          "mod": { "alpha": "m.png", "image": "m.png", "svg": "m.svg" },
          "subscriber": null
        }"#;
        let badges: ChatBadges = serde_json::from_str(body).unwrap();
        assert_eq!(badges.global_mod.svg, "s.svg");
        assert_eq!(badges.moderator.alpha, "m.png");
        assert_eq!(badges.subscriber, Badge::default());
    }

    #[test]
    fn top_games_decode() {
        let body = r#"{
          "_total": 322,
          "_links": { "next": "https://api.twitch.tv/kraken/games/top?limit=1&offset=1" },
          "top": [{
            "game": { "name": "Counter-Strike", "_id": 32399, "giantbomb_id": null,
                      "box": { "large": "l.jpg" }, "logo": null },
            "viewers": 23873,
            "channels": 305
          }]
        }"#;
        let games: TopGames = serde_json::from_str(body).unwrap();
        assert_eq!(games.total, 322);
        assert_eq!(games.top[0].game.name, "Counter-Strike");
        assert_eq!(games.top[0].game.box_art.large, "l.jpg");
        assert_eq!(games.top[0].game.giantbomb_id, 0);
    }
}
