//! Typed messages for incoming webhooks.

use crate::block::Block;
use serde::Serialize;

/// A structured webhook message. Anything Slack accepts but this doesn't
/// model can be sent as raw JSON instead; see [crate::webhook::WebhookPayload].
///
/// <https://api.slack.com/messaging/webhooks#advanced_message_formatting>
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WebhookMessage {
    // Used for notifications in the presence of `blocks`.
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<Block>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_ts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mrkdwn: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unfurl_links: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unfurl_media: Option<bool>,
}

impl WebhookMessage {
    pub fn new<T: Into<String>>(text: T) -> Self {
        WebhookMessage {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    /// Reply in a thread rather than the channel.
    pub fn in_thread<T: Into<String>>(mut self, ts: T) -> Self {
        self.thread_ts = Some(ts.into());
        self
    }

    pub fn unfurl(mut self, links: bool, media: bool) -> Self {
        self.unfurl_links = Some(links);
        self.unfurl_media = Some(media);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Text;
    use serde_json::{json, to_value};

    #[test]
    fn test_serialize_text_only() {
        assert_eq!(
            to_value(WebhookMessage::new("hello")).unwrap(),
            json!({ "text": "hello" })
        );
    }

    #[test]
    fn test_serialize_full() {
        let msg = WebhookMessage::new("Deployed: my-app")
            .block(Block::Header("Deployed".into()))
            .block(Block::Section(Text::Plain("my-app".into())))
            .in_thread("1503435956.000247")
            .unfurl(false, true);

        assert_eq!(
            to_value(msg).unwrap(),
            json!({
                "text": "Deployed: my-app",
                "blocks": [
                    {
                        "type": "header",
                        "text": { "type": "plain_text", "text": "Deployed" }
                    },
                    {
                        "type": "section",
                        "text": { "type": "plain_text", "text": "my-app" }
                    }
                ],
                "thread_ts": "1503435956.000247",
                "unfurl_links": false,
                "unfurl_media": true
            })
        );
    }
}
