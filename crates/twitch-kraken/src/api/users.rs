use super::models::{Blocks, User, UserFollow, UserFollows, UserSubscription};
use super::*;

/// User endpoints under `/kraken/users` and `/kraken/user`.
pub struct Users<'a> {
    pub(super) client: &'a KrakenClient,
}

impl Users<'_> {
    /// Get a user by name. An empty `name` returns the authenticated user
    /// (requires `user_read`).
    pub async fn user(&self, name: &str) -> Result<User, TwitchError> {
        self.client.get_json(BaseUrl::Kraken, &user_path(name)).await
    }

    /// Channels the user follows.
    pub async fn follows(
        &self,
        user: &str,
        opt: Option<&ListOptions>,
    ) -> Result<UserFollows, TwitchError> {
        let path = with_query(format!("users/{user}/follows/channels"), opt)?;
        self.client.get_json(BaseUrl::Kraken, &path).await
    }

    /// Whether `user` follows `channel`. A 404 [`TwitchError::Status`]
    /// means they do not.
    pub async fn follow(&self, user: &str, channel: &str) -> Result<UserFollow, TwitchError> {
        let path = format!("users/{user}/follows/channels/{channel}");
        self.client.get_json(BaseUrl::Kraken, &path).await
    }

    /// The user's subscription to `channel`. Requires `user_subscriptions`.
    pub async fn subscription(
        &self,
        user: &str,
        channel: &str,
    ) -> Result<UserSubscription, TwitchError> {
        let path = format!("users/{user}/subscriptions/{channel}");
        self.client.get_json(BaseUrl::Kraken, &path).await
    }

    /// Users blocked by `user`. Requires `user_blocks_read`.
    pub async fn blocks(
        &self,
        user: &str,
        opt: Option<&ListOptions>,
    ) -> Result<Blocks, TwitchError> {
        let path = with_query(format!("users/{user}/blocks"), opt)?;
        self.client.get_json(BaseUrl::Kraken, &path).await
    }
}

fn user_path(name: &str) -> String {
    if name.is_empty() {
        "user".to_string()
    } else {
        format!("users/{name}")
    }
}
