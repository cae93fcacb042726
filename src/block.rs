use serde::ser::SerializeStruct;
use serde::{ser, Serialize};

/// Slack's block API is its most modern, and allows mixing rich formatting
/// with foreign plaintext. This is a small subset thereof.
///
/// <https://api.slack.com/reference/block-kit/blocks>
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Always plaintext, as Slack requires.
    Header(String),
    Section(Text),
    /// Small, muted text. Slack permits at most ten elements.
    Context(Vec<Text>),
    Divider,
}

/// A text composition object.
///
/// <https://api.slack.com/reference/block-kit/composition-objects#text>
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Text {
    Plain(String),
    /// "mrkdwn" is Slack's alternative to Markdown.
    ///
    /// <https://api.slack.com/reference/surfaces/formatting#basics>
    Mrkdwn(String),
}

#[derive(Serialize)]
struct RawText<'a> {
    #[serde(rename = "type")]
    typ: &'static str,
    text: &'a String,
}

impl ser::Serialize for Text {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        let raw = match self {
            Text::Plain(x) => RawText {
                typ: "plain_text",
                text: x,
            },
            Text::Mrkdwn(x) => RawText {
                typ: "mrkdwn",
                text: x,
            },
        };

        raw.serialize(serializer)
    }
}

impl ser::Serialize for Block {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        match self {
            Block::Header(x) => {
                let mut state = serializer.serialize_struct("Block", 2)?;
                state.serialize_field("type", "header")?;
                state.serialize_field("text", &Text::Plain(x.to_owned()))?;
                state.end()
            }

            Block::Section(x) => {
                let mut state = serializer.serialize_struct("Block", 2)?;
                state.serialize_field("type", "section")?;
                state.serialize_field("text", x)?;
                state.end()
            }

            Block::Context(xs) => {
                let mut state = serializer.serialize_struct("Block", 2)?;
                state.serialize_field("type", "context")?;
                state.serialize_field("elements", xs)?;
                state.end()
            }

            Block::Divider => {
                let mut state = serializer.serialize_struct("Block", 1)?;
                state.serialize_field("type", "divider")?;
                state.end()
            }
        }
    }
}
