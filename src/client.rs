//! The client itself: construction and configuration. The operations live
//! alongside their wire types in [crate::api] and [crate::webhook].

use crate::{
    auth::SlackAccessToken,
    config::{team_api_base, ClientConfig, Credentials},
};
use url::Url;

/// A reusable client that holds a connection pool internally, as per
/// [reqwest::Client]. Cloning is cheap and clones share the pool.
#[derive(Debug, Clone)]
pub struct SlackClient {
    pub(crate) config: ClientConfig,
    pub(crate) http: reqwest::Client,
}

impl SlackClient {
    /// Instantiate a client for either of Slack's credential modes.
    pub fn new(creds: Credentials) -> Self {
        Self::from_config(creds.into())
    }

    /// Instantiate a client for the Web API.
    pub fn with_token<T: Into<SlackAccessToken>>(token: T) -> Self {
        Self::new(Credentials::Token(token.into()))
    }

    /// Instantiate a client for posting to an incoming webhook.
    pub fn with_webhook(url: Url) -> Self {
        Self::new(Credentials::Webhook(url))
    }

    /// Instantiate a client from fully specified configuration, for example
    /// when both a token and a webhook are in use.
    pub fn from_config(config: ClientConfig) -> Self {
        SlackClient {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn set_token<T: Into<SlackAccessToken>>(&mut self, token: T) -> &mut Self {
        self.config.token = Some(token.into());
        self
    }

    /// Scope onward API requests to a team's subdomain. This overwrites any
    /// previously set API base.
    pub fn set_team<T: AsRef<str>>(&mut self, team: T) -> &mut Self {
        self.config.api_base = team_api_base(team);
        self
    }

    pub fn set_webhook_url(&mut self, url: Url) -> &mut Self {
        self.config.webhook_url = Some(url);
        self
    }

    /// Point onward API requests somewhere other than Slack, for example a
    /// proxy. Method names are appended verbatim so this should end in a `/`.
    pub fn set_api_base<T: Into<String>>(&mut self, base: T) -> &mut Self {
        self.config.api_base = base.into();
        self
    }
}
