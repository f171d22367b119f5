//! Core `TranslateClient` trait and `HttpTranslateClient` implementation.
//!
//! `HttpTranslateClient` POSTs `{"text": …}` to the `/translate` endpoint of
//! the configured server and maps the JSON reply to a translation or an
//! error.  All connection details come from [`ServiceConfig`]; nothing is
//! hardcoded.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::config::ServiceConfig;

// ---------------------------------------------------------------------------
// TranslateError
// ---------------------------------------------------------------------------

/// Errors that can occur during a translation request.
#[derive(Debug, Clone, Error)]
pub enum TranslateError {
    /// HTTP transport or connection error.
    #[error("{0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The HTTP response body could not be parsed as JSON.
    #[error("invalid response body: {0}")]
    Parse(String),

    /// The service processed the request and explicitly reported failure.
    #[error("{0}")]
    Service(String),

    /// The response parsed as JSON but contained neither a non-empty
    /// `translation` field nor an `error` field.
    #[error("response contained neither translation nor error")]
    MalformedResponse,
}

impl TranslateError {
    /// The exact string rendered into the output region for this error.
    ///
    /// A service-reported failure is prefixed `"Error: "`; everything else
    /// is a transport-class failure prefixed `"Request failed: "`.
    pub fn user_message(&self) -> String {
        match self {
            TranslateError::Service(msg) => format!("Error: {msg}"),
            other => format!("Request failed: {other}"),
        }
    }
}

impl From<reqwest::Error> for TranslateError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TranslateError::Timeout
        } else {
            TranslateError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// TranslateClient trait
// ---------------------------------------------------------------------------

/// Async trait for translation service clients.
///
/// Implementors must be `Send + Sync` so they can be shared across tasks
/// (e.g. wrapped in `Arc<dyn TranslateClient>`).
#[async_trait]
pub trait TranslateClient: Send + Sync {
    /// Submit `text` for translation and return the translated text.
    async fn translate(&self, text: &str) -> Result<String, TranslateError>;
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

/// Expected JSON shape of a reply from the `/translate` endpoint.
///
/// Exactly one of the two fields is normally present:
/// `{"translation": "…"}` on success, `{"error": "…"}` on failure.
#[derive(Debug, Deserialize)]
struct TranslateReply {
    translation: Option<String>,
    error: Option<String>,
}

/// Map a raw response body to a translation outcome.
///
/// * non-empty `translation` field → `Ok(translation)`
/// * `error` field                 → `Err(Service)`
/// * not JSON                      → `Err(Parse)`
/// * neither field (or an empty `translation` with no `error`)
///   → `Err(MalformedResponse)` — the UI must never stay stuck on the
///   pending indicator because the server sent an unexpected shape.
fn parse_reply(body: &str) -> Result<String, TranslateError> {
    let reply: TranslateReply =
        serde_json::from_str(body).map_err(|e| TranslateError::Parse(e.to_string()))?;

    match reply.translation {
        Some(translation) if !translation.is_empty() => Ok(translation),
        _ => match reply.error {
            Some(error) => Err(TranslateError::Service(error)),
            None => Err(TranslateError::MalformedResponse),
        },
    }
}

/// Build the request body for `text`.
///
/// The text is sent exactly as captured — empty input still produces
/// `{"text": ""}` with no client-side validation gate.
fn request_body(text: &str) -> serde_json::Value {
    serde_json::json!({ "text": text })
}

// ---------------------------------------------------------------------------
// HttpTranslateClient
// ---------------------------------------------------------------------------

/// Production client that POSTs to `{base_url}/translate`.
///
/// # No hardcoded URLs
/// The server address comes exclusively from the [`ServiceConfig`] passed to
/// [`HttpTranslateClient::from_config`].
pub struct HttpTranslateClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTranslateClient {
    /// Build an `HttpTranslateClient` from service config.
    ///
    /// When `config.timeout_secs` is `Some(n)` the HTTP client is
    /// pre-configured with an `n`-second per-request timeout; when `None`
    /// the request stays outstanding until the transport resolves or fails.
    /// A default client is used as a last-resort fallback if the builder
    /// fails (should never happen in practice).
    pub fn from_config(config: &ServiceConfig) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder.build().unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl TranslateClient for HttpTranslateClient {
    /// POST `{"text": <text>}` to `{base_url}/translate` and parse the reply.
    ///
    /// The body is parsed regardless of HTTP status — the server reports
    /// translation failures as `{"error": …}` with a 5xx status, and those
    /// must surface as service errors, not transport errors.
    async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        let url = format!("{}/translate", self.base_url);

        log::debug!("client: POST {url} ({} bytes of text)", text.len());

        let response = self
            .client
            .post(&url)
            .json(&request_body(text))
            .send()
            .await?;

        let body = response.text().await?;
        parse_reply(&body)
    }
}

// ---------------------------------------------------------------------------
// MockTranslateClient  (test-only)
// ---------------------------------------------------------------------------

/// A test double that replays a script of pre-configured outcomes without
/// touching the network.
///
/// Each scripted entry carries a delay, so tests can force responses to
/// resolve out of trigger order.  Every submitted text is recorded in
/// [`calls`](MockTranslateClient::calls).
#[cfg(test)]
pub struct MockTranslateClient {
    script: std::sync::Mutex<std::collections::VecDeque<ScriptEntry>>,
    /// Texts received by `translate`, in call order.
    pub calls: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
type ScriptEntry = (std::time::Duration, Result<String, TranslateError>);

#[cfg(test)]
impl MockTranslateClient {
    /// Create a mock whose every call immediately returns `Ok(text)`.
    pub fn ok(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::scripted(vec![(std::time::Duration::ZERO, Ok(text))])
    }

    /// Create a mock whose every call immediately returns `Err(error)`.
    pub fn err(error: TranslateError) -> Self {
        Self::scripted(vec![(std::time::Duration::ZERO, Err(error))])
    }

    /// Create a mock that replays `script` in order.  Once the script is
    /// exhausted the last entry is repeated.
    pub fn scripted(script: Vec<ScriptEntry>) -> Self {
        Self {
            script: std::sync::Mutex::new(script.into_iter().collect()),
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl TranslateClient for MockTranslateClient {
    async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        self.calls.lock().unwrap().push(text.to_string());

        let (delay, outcome) = {
            let mut script = self.script.lock().unwrap();
            if script.len() > 1 {
                script.pop_front().unwrap()
            } else {
                script.front().cloned().unwrap_or((
                    std::time::Duration::ZERO,
                    Err(TranslateError::Request("mock script exhausted".into())),
                ))
            }
        };

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        outcome
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
