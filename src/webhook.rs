//! Post messages to a Slack incoming webhook.
//!
//! <https://api.slack.com/messaging/webhooks>

use crate::{
    error::{ConfigError, SlackError},
    message::WebhookMessage,
    SlackClient,
};
use reqwest::header;
use serde::{ser, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Anything that can be posted to a webhook.
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookPayload {
    /// Bare message text, sent as `{"text": ...}`.
    Text(String),
    Message(WebhookMessage),
    /// Sent exactly as given.
    Raw(Value),
}

impl WebhookPayload {
    /// Use any serializable value as the payload, for message shapes not
    /// covered by [WebhookMessage].
    pub fn from_serialize<T: Serialize + ?Sized>(x: &T) -> Result<Self, SlackError> {
        serde_json::to_value(x)
            .map(WebhookPayload::Raw)
            .map_err(SlackError::InvalidPayload)
    }
}

impl From<&str> for WebhookPayload {
    fn from(x: &str) -> Self {
        WebhookPayload::Text(x.to_owned())
    }
}

impl From<String> for WebhookPayload {
    fn from(x: String) -> Self {
        WebhookPayload::Text(x)
    }
}

impl From<WebhookMessage> for WebhookPayload {
    fn from(x: WebhookMessage) -> Self {
        WebhookPayload::Message(x)
    }
}

impl From<Value> for WebhookPayload {
    fn from(x: Value) -> Self {
        WebhookPayload::Raw(x)
    }
}

impl From<Map<String, Value>> for WebhookPayload {
    fn from(x: Map<String, Value>) -> Self {
        WebhookPayload::Raw(Value::Object(x))
    }
}

impl ser::Serialize for WebhookPayload {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        match self {
            WebhookPayload::Text(x) => WebhookMessage::new(x.as_str()).serialize(serializer),
            WebhookPayload::Message(x) => x.serialize(serializer),
            WebhookPayload::Raw(x) => x.serialize(serializer),
        }
    }
}

impl SlackClient {
    /// Post a message to the configured webhook.
    ///
    /// Returns Slack's reply verbatim: `ok` on success, otherwise an
    /// explanation such as `invalid_payload` or `no_service`. The reply is not
    /// otherwise interpreted, and an unsuccessful reply is not an error.
    pub async fn send_message<P: Into<WebhookPayload>>(
        &self,
        payload: P,
    ) -> Result<String, SlackError> {
        let url = self
            .config
            .webhook_url
            .as_ref()
            .ok_or(ConfigError::MissingWebhookUrl)?;

        let body = serde_json::to_string(&payload.into()).map_err(SlackError::InvalidPayload)?;

        // The URL is the credential, so it stays out of the logs.
        debug!("Posting Slack webhook message");

        let reply = self
            .http
            .post(url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?
            .text()
            .await?;

        Ok(reply)
    }
}
