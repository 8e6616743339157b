//! Application credentials for the Kraken API.

/// Registered application information.
///
/// Empty strings mean "not configured": an empty `client_id` is never sent
/// as a `Client-ID` header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppInfo {
    pub client_id: String,
    pub client_secret: String,
    pub state: String,
    pub redirect_uri: String,
    pub scope: String,
}

impl AppInfo {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            ..Self::default()
        }
    }

    /// Load from `TWITCH_CLIENT_ID`, `TWITCH_CLIENT_SECRET`, `TWITCH_STATE`,
    /// `TWITCH_REDIRECT_URI` and `TWITCH_SCOPE`. Unset variables are empty.
    ///
    /// These replace the older `GO_TWITCH_CLIENTID`, `GO_TWITCH_CLIENTSECRET`,
    /// `GO_TWITCH_REDIRECTURL` and `GO_TWITCH_SCOPE` names, which are not
    /// read. `state` has its own variable instead of reusing the client id.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let g = |key: &str| lookup(key).unwrap_or_default();
        Self {
            client_id: g("TWITCH_CLIENT_ID"),
            client_secret: g("TWITCH_CLIENT_SECRET"),
            state: g("TWITCH_STATE"),
            redirect_uri: g("TWITCH_REDIRECT_URI"),
            scope: g("TWITCH_SCOPE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn from_lookup_reads_each_variable() {
        let vars: HashMap<&str, &str> = [
            ("TWITCH_CLIENT_ID", "cid"),
            ("TWITCH_CLIENT_SECRET", "secret"),
            ("TWITCH_STATE", "xyz"),
            ("TWITCH_REDIRECT_URI", "http://localhost/cb"),
            ("TWITCH_SCOPE", "user_read"),
        ]
        .into_iter()
        .collect();

        let app = AppInfo::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(app.client_id, "cid");
        assert_eq!(app.client_secret, "secret");
        assert_eq!(app.state, "xyz");
        assert_eq!(app.redirect_uri, "http://localhost/cb");
        assert_eq!(app.scope, "user_read");
    }

    #[test]
    fn legacy_variable_names_are_ignored() {
        let app =
            AppInfo::from_lookup(|k| k.starts_with("GO_TWITCH_").then(|| "old".to_string()));
        assert_eq!(app, AppInfo::default());
    }

    #[test]
    fn missing_variables_are_empty() {
        let app = AppInfo::from_lookup(|_| None);
        assert_eq!(app, AppInfo::default());
    }
}
