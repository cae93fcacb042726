use reqwest::StatusCode;
use thiserror::Error;

/// Sum type representing every possible unexceptional fail state.
#[derive(Debug, Error)]
pub enum SlackError {
    #[error("Slack client misconfigured: {0}")]
    Configuration(#[from] ConfigError),

    #[error("Slack API request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Slack API returned malformed response ({status}): {reason}")]
    MalformedResponse { status: StatusCode, reason: String },

    #[error("Slack API returned error: {0}")]
    ApiResponseError(String),

    #[error("Slack API arguments could not be encoded: {0}")]
    InvalidArgs(#[from] serde_urlencoded::ser::Error),

    #[error("Slack webhook payload could not be encoded: {0}")]
    InvalidPayload(#[source] serde_json::Error),
}

/// Configuration which is only validated upon first use of the operation that
/// needs it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cannot execute Slack API request with no API token defined")]
    MissingToken,

    #[error("cannot send message via webhook with no webhook defined")]
    MissingWebhookUrl,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            SlackError::ApiResponseError("channel_not_found".into()).to_string(),
            "Slack API returned error: channel_not_found"
        );

        assert_eq!(
            SlackError::from(ConfigError::MissingToken).to_string(),
            "Slack client misconfigured: cannot execute Slack API request with no API token defined"
        );

        assert_eq!(
            SlackError::MalformedResponse {
                status: StatusCode::BAD_GATEWAY,
                reason: "expected value at line 1 column 1".into(),
            }
            .to_string(),
            "Slack API returned malformed response (502 Bad Gateway): expected value at line 1 column 1"
        );
    }
}
