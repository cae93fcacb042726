//! A small client for Slack's HTTP API.
//!
//! Two independent modes are supported, either or both of which a
//! [SlackClient] can be configured for:
//!
//! - Calling any [Web API](https://api.slack.com/web) method with a bearer
//!   token, see [SlackClient::request].
//! - Posting messages to an
//!   [incoming webhook](https://api.slack.com/messaging/webhooks), see
//!   [SlackClient::send_message].
//!
//! ```no_run
//! # async fn run() -> Result<(), slack_api::SlackError> {
//! use slack_api::{Method, SlackClient};
//!
//! let mut client = SlackClient::with_token("xoxb-foo");
//! client.set_team("acme");
//!
//! let res = client
//!     .request(Method::POST, "chat.postMessage", &[("channel", "C1"), ("text", "hi")])
//!     .await?;
//! assert!(res.ok());
//! # Ok(())
//! # }
//! ```
//!
//! Nothing is retried, paginated, or rate limited on the caller's behalf.

pub mod api;
pub mod auth;
pub mod block;
mod client;
pub mod config;
pub mod error;
pub mod message;
pub mod webhook;

pub use api::{ApiResponse, NO_ARGS};
pub use client::SlackClient;
pub use config::{ClientConfig, Credentials};
pub use error::{ConfigError, SlackError};
pub use message::WebhookMessage;
pub use reqwest::Method;
pub use webhook::WebhookPayload;
