//! Translation request orchestrator — drives the submit → request → display
//! loop.
//!
//! [`TranslateOrchestrator`] owns the [`SharedState`] and responds to
//! [`UiCommand`]s received over a `tokio::sync::mpsc` channel.
//!
//! # Request flow
//!
//! ```text
//! UiCommand::Submit { text }
//!   ├─▶ seq = next sequence number, state = Pending   (before any I/O)
//!   └─▶ spawn: client.translate(text)
//!         ├─ Ok(translation)  → Success(translation)
//!         └─ Err(e)           → Error(e.user_message())
//!       written only while seq is still the current request;
//!       stale responses are discarded
//! ```
//!
//! A second submit fired before the first request resolves starts a second
//! request without cancelling the first.  The sequence-number guard decides
//! which response may write the display slot: only the most recently issued
//! request's outcome becomes visible, regardless of arrival order.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::client::TranslateClient;

use super::state::{DisplayState, SharedState};

// ---------------------------------------------------------------------------
// UiCommand
// ---------------------------------------------------------------------------

/// Commands sent from the UI to the orchestrator.
#[derive(Debug, Clone)]
pub enum UiCommand {
    /// The user triggered a translation.  `text` is the input field's
    /// contents as read at trigger time — possibly empty, sent unmodified.
    Submit { text: String },
}

// ---------------------------------------------------------------------------
// TranslateOrchestrator
// ---------------------------------------------------------------------------

/// Drives the translation request/response cycle.
///
/// Create with [`TranslateOrchestrator::new`], then call [`run`](Self::run)
/// inside a tokio task.
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use translate_widget::client::{HttpTranslateClient, TranslateClient};
/// use translate_widget::config::AppConfig;
/// use translate_widget::orchestrator::{new_shared_state, TranslateOrchestrator};
///
/// # async fn example() {
/// let config = AppConfig::default();
/// let shared_state = new_shared_state(config.clone());
/// let client: Arc<dyn TranslateClient> =
///     Arc::new(HttpTranslateClient::from_config(&config.service));
///
/// let (command_tx, command_rx) = tokio::sync::mpsc::channel(16);
/// let orchestrator = TranslateOrchestrator::new(shared_state, client);
/// tokio::spawn(orchestrator.run(command_rx));
///
/// // command_tx is handed to the UI.
/// # let _ = command_tx;
/// # }
/// ```
pub struct TranslateOrchestrator {
    state: SharedState,
    client: Arc<dyn TranslateClient>,
    /// Monotonically increasing request counter; the issued value is stored
    /// in `AppState::current_seq` at submit time.
    next_seq: u64,
    in_flight: Vec<JoinHandle<()>>,
}

impl TranslateOrchestrator {
    /// Create a new orchestrator.
    ///
    /// # Arguments
    ///
    /// * `state`  — shared application state (also read by the UI).
    /// * `client` — translation service client.
    pub fn new(state: SharedState, client: Arc<dyn TranslateClient>) -> Self {
        Self {
            state,
            client,
            next_seq: 0,
            in_flight: Vec::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Main async loop
    // -----------------------------------------------------------------------

    /// Run the orchestrator until `command_rx` is closed, then wait for any
    /// requests still in flight so their outcomes are applied (or discarded)
    /// before returning.
    ///
    /// This is an `async fn` and should be spawned as a tokio task from
    /// `main()`.
    pub async fn run(mut self, mut command_rx: mpsc::Receiver<UiCommand>) {
        while let Some(cmd) = command_rx.recv().await {
            match cmd {
                UiCommand::Submit { text } => self.handle_submit(text),
            }
        }

        log::info!("orchestrator: command channel closed, shutting down");
        for handle in self.in_flight.drain(..) {
            let _ = handle.await;
        }
    }

    // -----------------------------------------------------------------------
    // Submit handling
    // -----------------------------------------------------------------------

    /// Issue a translation request for `text`.
    ///
    /// The pending indicator is written before the request task is spawned,
    /// so the UI renders `"Translating..."` ahead of any network activity.
    fn handle_submit(&mut self, text: String) {
        self.next_seq += 1;
        let seq = self.next_seq;

        log::debug!("orchestrator: submit #{seq} ({} bytes)", text.len());

        {
            let mut st = self.state.lock().unwrap();
            st.display = DisplayState::Pending;
            st.current_seq = seq;
        }

        // Drop handles of requests that already completed.
        self.in_flight.retain(|h| !h.is_finished());

        let client = Arc::clone(&self.client);
        let state = Arc::clone(&self.state);

        self.in_flight.push(tokio::spawn(async move {
            let outcome = client.translate(&text).await;

            let mut st = state.lock().unwrap();
            if st.current_seq != seq {
                // A newer request was issued while this one was in flight;
                // its outcome owns the display slot now.
                log::debug!(
                    "orchestrator: discarding stale response #{seq} (current is #{})",
                    st.current_seq
                );
                return;
            }

            st.display = match outcome {
                Ok(translation) => {
                    log::debug!("orchestrator: request #{seq} succeeded");
                    DisplayState::Success(translation)
                }
                Err(e) => {
                    log::warn!("orchestrator: request #{seq} failed: {e}");
                    DisplayState::Error(e.user_message())
                }
            };
        }));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::Semaphore;

    use crate::client::{MockTranslateClient, TranslateError};
    use crate::config::AppConfig;
    use crate::orchestrator::state::new_shared_state;

    // -----------------------------------------------------------------------
    // Test doubles
    // -----------------------------------------------------------------------

    /// Client that blocks until the test releases a permit, then succeeds.
    struct GatedClient {
        gate: Arc<Semaphore>,
        reply: String,
    }

    #[async_trait]
    impl crate::client::TranslateClient for GatedClient {
        async fn translate(&self, _text: &str) -> Result<String, TranslateError> {
            let _permit = self.gate.acquire().await.map_err(|e| {
                TranslateError::Request(e.to_string())
            })?;
            Ok(self.reply.clone())
        }
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn make_orchestrator(
        client: Arc<dyn TranslateClient>,
    ) -> (TranslateOrchestrator, crate::orchestrator::SharedState) {
        let state = new_shared_state(AppConfig::default());
        let orc = TranslateOrchestrator::new(Arc::clone(&state), client);
        (orc, state)
    }

    async fn submit_and_finish(
        client: Arc<dyn TranslateClient>,
        texts: &[&str],
    ) -> crate::orchestrator::SharedState {
        let (tx, rx) = mpsc::channel(4);
        let (orc, state) = make_orchestrator(client);

        for text in texts {
            tx.send(UiCommand::Submit {
                text: text.to_string(),
            })
            .await
            .unwrap();
        }
        drop(tx); // close channel so run() drains and returns

        orc.run(rx).await;
        state
    }

    // -----------------------------------------------------------------------
    // Tests
    // -----------------------------------------------------------------------

    /// The pending indicator must be visible while the request is in flight,
    /// before the client resolves.
    #[tokio::test]
    async fn submit_shows_pending_before_response() {
        let gate = Arc::new(Semaphore::new(0));
        let client = Arc::new(GatedClient {
            gate: Arc::clone(&gate),
            reply: "Bonjour".into(),
        });

        let (tx, rx) = mpsc::channel(4);
        let (orc, state) = make_orchestrator(client);
        let runner = tokio::spawn(orc.run(rx));

        tx.send(UiCommand::Submit {
            text: "Hello".into(),
        })
        .await
        .unwrap();

        // Give the orchestrator a moment to process the command; the client
        // is still blocked on the gate.
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(state.lock().unwrap().display, DisplayState::Pending);

        // Release the response and let the orchestrator finish.
        gate.add_permits(1);
        drop(tx);
        runner.await.unwrap();

        assert_eq!(
            state.lock().unwrap().display,
            DisplayState::Success("Bonjour".into())
        );
    }

    /// A `{"translation": "Bonjour"}` reply ends with the output region
    /// holding exactly `Bonjour`.
    #[tokio::test]
    async fn successful_reply_renders_translation() {
        let client = Arc::new(MockTranslateClient::ok("Bonjour"));
        let state = submit_and_finish(client, &["Hello"]).await;

        let st = state.lock().unwrap();
        assert_eq!(st.display, DisplayState::Success("Bonjour".into()));
        assert_eq!(st.display.text(), "Bonjour");
    }

    /// A `{"error": "unsupported language"}` reply renders the prefixed
    /// application error.
    #[tokio::test]
    async fn service_error_renders_error_prefix() {
        let client = Arc::new(MockTranslateClient::err(TranslateError::Service(
            "unsupported language".into(),
        )));
        let state = submit_and_finish(client, &["Hello"]).await;

        let st = state.lock().unwrap();
        assert_eq!(st.display.text(), "Error: unsupported language");
    }

    /// A transport failure renders the prefixed failure description.
    #[tokio::test]
    async fn transport_failure_renders_request_failed_prefix() {
        let client = Arc::new(MockTranslateClient::err(TranslateError::Request(
            "NetworkError".into(),
        )));
        let state = submit_and_finish(client, &["Hello"]).await;

        let st = state.lock().unwrap();
        assert_eq!(st.display.text(), "Request failed: NetworkError");
    }

    /// A reply with neither field is surfaced as a transport-class error —
    /// the UI must not stay stuck on the pending indicator.
    #[tokio::test]
    async fn malformed_reply_does_not_stay_pending() {
        let client = Arc::new(MockTranslateClient::err(TranslateError::MalformedResponse));
        let state = submit_and_finish(client, &["Hello"]).await;

        let st = state.lock().unwrap();
        assert!(st.display.text().starts_with("Request failed: "));
    }

    /// Empty input goes through the same flow unmodified — no validation
    /// gate on the client side.
    #[tokio::test]
    async fn empty_text_is_submitted_unmodified() {
        let mock = Arc::new(MockTranslateClient::ok("nothing to do"));
        let client: Arc<dyn TranslateClient> = Arc::clone(&mock);
        let state = submit_and_finish(client, &[""]).await;

        assert_eq!(mock.calls.lock().unwrap().as_slice(), [""]);
        assert_eq!(
            state.lock().unwrap().display,
            DisplayState::Success("nothing to do".into())
        );
    }

    /// Two overlapping submissions where the earlier request resolves last:
    /// the latest-issued request wins and the stale response is discarded.
    #[tokio::test]
    async fn stale_response_is_discarded() {
        let client = Arc::new(MockTranslateClient::scripted(vec![
            (Duration::from_millis(100), Ok("first".into())),
            (Duration::from_millis(10), Ok("second".into())),
        ]));
        let state = submit_and_finish(client, &["one", "two"]).await;

        // The first request's response arrived after the second's, but the
        // second submit owns the display slot.
        assert_eq!(
            state.lock().unwrap().display,
            DisplayState::Success("second".into())
        );
    }

    /// A stale failure must not overwrite a fresher success either.
    #[tokio::test]
    async fn stale_failure_does_not_overwrite_fresh_success() {
        let client = Arc::new(MockTranslateClient::scripted(vec![
            (
                Duration::from_millis(100),
                Err(TranslateError::Request("NetworkError".into())),
            ),
            (Duration::from_millis(10), Ok("fresh".into())),
        ]));
        let state = submit_and_finish(client, &["one", "two"]).await;

        assert_eq!(
            state.lock().unwrap().display,
            DisplayState::Success("fresh".into())
        );
    }

    /// Each submit reads a fresh sequence number; three rapid submits leave
    /// the slot with the third outcome.
    #[tokio::test]
    async fn latest_of_three_submits_wins() {
        let client = Arc::new(MockTranslateClient::scripted(vec![
            (Duration::from_millis(60), Ok("a".into())),
            (Duration::from_millis(40), Ok("b".into())),
            (Duration::from_millis(5), Ok("c".into())),
        ]));
        let state = submit_and_finish(client, &["1", "2", "3"]).await;

        assert_eq!(
            state.lock().unwrap().display,
            DisplayState::Success("c".into())
        );
    }

    /// An error state is terminal only until the next submit, which recovers
    /// through `Pending` to the new outcome.
    #[tokio::test]
    async fn new_submit_recovers_from_error() {
        let client = Arc::new(MockTranslateClient::scripted(vec![
            (
                Duration::ZERO,
                Err(TranslateError::Service("unsupported language".into())),
            ),
            (Duration::ZERO, Ok("Bonjour".into())),
        ]));

        let (tx, rx) = mpsc::channel(4);
        let (orc, state) = make_orchestrator(client);
        let runner = tokio::spawn(orc.run(rx));

        tx.send(UiCommand::Submit { text: "x".into() }).await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(
            state.lock().unwrap().display.text(),
            "Error: unsupported language"
        );

        tx.send(UiCommand::Submit { text: "y".into() }).await.unwrap();
        drop(tx);
        runner.await.unwrap();

        assert_eq!(
            state.lock().unwrap().display,
            DisplayState::Success("Bonjour".into())
        );
    }
}
