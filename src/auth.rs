//! Helpers around Slack's use of OAuth Bearer Authentication.

use serde::Deserialize;
use std::{convert::Infallible, fmt, str::FromStr};

/// A newtype wrapper around Slack access tokens, be they bot (`xoxb-`) or
/// user (`xoxp-`) tokens.
#[derive(PartialEq, Eq, Hash, Clone, Deserialize)]
#[serde(transparent)]
pub struct SlackAccessToken(pub String);

impl SlackAccessToken {
    /// Slack treats an empty token the same as no token at all, and so do we.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for SlackAccessToken {
    fn from(x: String) -> Self {
        SlackAccessToken(x)
    }
}

impl From<&str> for SlackAccessToken {
    fn from(x: &str) -> Self {
        SlackAccessToken(x.to_owned())
    }
}

impl FromStr for SlackAccessToken {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}

// Tokens end up in logged configuration far too easily.
impl fmt::Debug for SlackAccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SlackAccessToken(***)")
    }
}

/// Convert a Slack access token to a `Bearer` `Authorization` header value.
///
/// ```
/// use slack_api::auth::{to_auth_header_val, SlackAccessToken};
///
/// let token = SlackAccessToken("xoxb-foo".into());
/// assert_eq!(to_auth_header_val(&token), "Bearer xoxb-foo");
/// ```
pub fn to_auth_header_val(t: &SlackAccessToken) -> String {
    format!("Bearer {}", t.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_token() {
        let token = SlackAccessToken("xoxb-secret".into());

        assert!(!format!("{:?}", token).contains("secret"));
    }

    #[test]
    fn test_is_empty() {
        assert!(SlackAccessToken::from("").is_empty());
        assert!(!SlackAccessToken::from("xoxb-foo").is_empty());
    }
}
