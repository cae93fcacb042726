//! Client configuration, and the two credential modes Slack supports.

use crate::auth::SlackAccessToken;
use serde::Deserialize;
use serde_with::{serde_as, NoneAsEmptyString};
use url::Url;

/// The base URL of the Slack API. Method names are appended directly, so the
/// trailing slash matters.
pub const API_BASE: &str = "https://slack.com/api/";

/// The base URL of the Slack API scoped to a team (workspace) subdomain.
///
/// ```
/// use slack_api::config::team_api_base;
///
/// assert_eq!(team_api_base("acme"), "https://acme.slack.com/api/");
/// ```
pub fn team_api_base<T: AsRef<str>>(team: T) -> String {
    format!("https://{}.slack.com/api/", team.as_ref())
}

/// The two mutually exclusive ways of authenticating with Slack.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// A bearer token for the Web API.
    Token(SlackAccessToken),
    /// An incoming webhook, which carries its own authorisation in the URL.
    Webhook(Url),
}

/// Everything a [crate::SlackClient] needs to know. Nothing here is validated
/// until an operation requires it.
///
/// Deserializable so that host applications can embed it in their own config:
///
/// ```
/// use slack_api::config::{ClientConfig, API_BASE};
///
/// let cfg: ClientConfig = serde_json::from_str(r#"{ "token": "xoxb-foo" }"#).unwrap();
/// assert_eq!(cfg.api_base, API_BASE);
/// assert!(cfg.webhook_url.is_none());
/// ```
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    #[serde_as(as = "NoneAsEmptyString")]
    pub token: Option<SlackAccessToken>,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default)]
    #[serde_as(as = "NoneAsEmptyString")]
    pub webhook_url: Option<Url>,
}

fn default_api_base() -> String {
    API_BASE.to_owned()
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            token: None,
            api_base: default_api_base(),
            webhook_url: None,
        }
    }
}

impl From<Credentials> for ClientConfig {
    fn from(creds: Credentials) -> Self {
        match creds {
            Credentials::Token(t) => ClientConfig {
                token: Some(t),
                ..Default::default()
            },
            Credentials::Webhook(u) => ClientConfig {
                webhook_url: Some(u),
                ..Default::default()
            },
        }
    }
}

impl ClientConfig {
    /// The token, if one is set and non-empty.
    pub fn usable_token(&self) -> Option<&SlackAccessToken> {
        self.token.as_ref().filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn test_from_credentials() {
        let cfg = ClientConfig::from(Credentials::Token("xoxb-foo".into()));
        assert_eq!(cfg.token, Some(SlackAccessToken::from("xoxb-foo")));
        assert_eq!(cfg.api_base, API_BASE);
        assert!(cfg.webhook_url.is_none());

        let hook = Url::parse("https://hooks.slack.com/services/T0/B0/X").unwrap();
        let cfg = ClientConfig::from(Credentials::Webhook(hook.clone()));
        assert!(cfg.token.is_none());
        assert_eq!(cfg.webhook_url, Some(hook));
    }

    #[test]
    fn test_deserialize_empty_strings_as_none() {
        let cfg: ClientConfig = serde_json::from_str(
            r#"{
                "token": "",
                "webhook_url": ""
            }"#,
        )
        .unwrap();

        assert!(cfg.token.is_none());
        assert!(cfg.webhook_url.is_none());
    }

    #[test]
    fn test_deserialize_full() {
        let cfg: ClientConfig = serde_json::from_str(
            r#"{
                "token": "xoxb-foo",
                "api_base": "https://acme.slack.com/api/",
                "webhook_url": "https://hooks.slack.com/services/T0/B0/X"
            }"#,
        )
        .unwrap();

        assert_eq!(cfg.token, Some(SlackAccessToken::from("xoxb-foo")));
        assert_eq!(cfg.api_base, "https://acme.slack.com/api/");
        assert_eq!(
            cfg.webhook_url.map(String::from),
            Some("https://hooks.slack.com/services/T0/B0/X".to_owned())
        );
    }

    #[test]
    fn test_deserialize_bad_webhook_url() {
        let res = serde_json::from_str::<ClientConfig>(r#"{ "webhook_url": "not a url" }"#);

        assert!(res.is_err());
    }

    #[test]
    fn test_usable_token() {
        let mut cfg = ClientConfig::default();
        assert!(cfg.usable_token().is_none());

        cfg.token = Some("".into());
        assert!(cfg.usable_token().is_none());

        cfg.token = Some("xoxb-foo".into());
        assert_eq!(cfg.usable_token(), Some(&SlackAccessToken::from("xoxb-foo")));
    }

    quickcheck! {
        fn test_team_api_base_wraps_team(team: String) -> bool {
            let base = team_api_base(&team);

            base.starts_with("https://")
                && base.ends_with(".slack.com/api/")
                && base[8..base.len() - 15] == team
        }
    }
}
