//! Authenticated calls to any Slack Web API method.
//!
//! <https://api.slack.com/web>

use crate::{
    auth::to_auth_header_val,
    error::{ConfigError, SlackError},
    SlackClient,
};
use reqwest::{header, Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Arguments for methods which don't need any.
pub const NO_ARGS: &[(&str, &str)] = &[];

/// The parsed body of a Slack API response. Slack's responses share an
/// envelope:
///
/// ```json
/// {
///     "ok": true,
///     "channel": "C0123456789"
/// }
/// ```
///
/// ```json
/// {
///     "ok": false,
///     "error": "channel_not_found"
/// }
/// ```
///
/// Only `error` is inspected by the client. Everything else is left to the
/// caller, either via [ApiResponse::get] or by deserializing into a type of
/// their own with [ApiResponse::deserialize].
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse(Map<String, Value>);

impl ApiResponse {
    /// Slack's own success flag. Absent is treated as `false`.
    pub fn ok(&self) -> bool {
        self.0.get("ok").and_then(Value::as_bool).unwrap_or(false)
    }

    /// The error Slack reported, if any. A missing key, or one holding a
    /// falsy value, is no error.
    pub fn error(&self) -> Option<String> {
        self.0
            .get("error")
            .filter(|v| is_truthy(v))
            .map(error_message)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// Decode the response into a caller-defined type.
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        serde_json::from_value(Value::Object(self.0))
    }
}

impl SlackClient {
    /// Call any Slack API method.
    ///
    /// `args` may be anything which serializes to a flat set of key/value
    /// pairs: a slice of tuples, a map, or a struct. For `GET` they're sent as
    /// a query string, for `POST` as an `application/x-www-form-urlencoded`
    /// body, and for any other verb they're not sent at all.
    ///
    /// The response body is parsed whatever the HTTP status.
    pub async fn request<A: Serialize + ?Sized>(
        &self,
        verb: Method,
        method: &str,
        args: &A,
    ) -> Result<ApiResponse, SlackError> {
        let token = self
            .config
            .usable_token()
            .ok_or(ConfigError::MissingToken)?;

        let args = serde_urlencoded::to_string(args)?;
        let url = build_url(&self.config.api_base, method, &verb, &args);

        debug!(%verb, method, "Dispatching Slack API request");

        let req = self
            .http
            .request(verb.clone(), url)
            .header(header::AUTHORIZATION, to_auth_header_val(token));

        let req = match verb {
            Method::GET => req,
            Method::POST => req
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(args),
            _ => {
                if !args.is_empty() {
                    debug!(%verb, method, "Dropping arguments unsupported by verb");
                }
                req
            }
        };

        let res = req.send().await?;

        let status = res.status();
        if !status.is_success() {
            warn!(%status, method, "Slack API responded with unsuccessful status");
        }

        let body = res.text().await?;

        parse_response(status, &body)
    }

    /// Shorthand for [SlackClient::request] with `GET`.
    pub async fn get<A: Serialize + ?Sized>(
        &self,
        method: &str,
        args: &A,
    ) -> Result<ApiResponse, SlackError> {
        self.request(Method::GET, method, args).await
    }

    /// Shorthand for [SlackClient::request] with `POST`.
    pub async fn post<A: Serialize + ?Sized>(
        &self,
        method: &str,
        args: &A,
    ) -> Result<ApiResponse, SlackError> {
        self.request(Method::POST, method, args).await
    }
}

/// Put together the URL for a method, including the query string for `GET`
/// requests that have arguments. `args` must already be URL-encoded.
fn build_url(base: &str, method: &str, verb: &Method, args: &str) -> String {
    let url = base.to_owned() + method;

    if *verb == Method::GET && !args.is_empty() {
        url + "?" + args
    } else {
        url
    }
}

/// Parse a response body, surfacing any error Slack reported.
fn parse_response(status: StatusCode, body: &str) -> Result<ApiResponse, SlackError> {
    let malformed = |reason: String| SlackError::MalformedResponse { status, reason };

    let res = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => ApiResponse(map),
        Ok(_) => return Err(malformed("expected a JSON object".into())),
        Err(e) => return Err(malformed(e.to_string())),
    };

    match res.error() {
        Some(e) => {
            warn!(error = e.as_str(), "Slack API returned error");
            Err(SlackError::ApiResponseError(e))
        }
        None => Ok(res),
    }
}

/// Loose truthiness, so that `"error": ""` or `"error": null` don't count.
fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |x| x != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(xs) => !xs.is_empty(),
        Value::Object(_) => true,
    }
}

fn error_message(v: &Value) -> String {
    match v {
        Value::String(s) => s.to_owned(),
        x => x.to_string(),
    }
}
