//! Display state machine and shared application state.
//!
//! [`DisplayState`] is the single slot that tracks the outcome of the most
//! recently initiated translation request.  The UI reads it via
//! [`SharedState`] to render the output region each frame.
//!
//! [`SharedState`] is a type alias for `Arc<Mutex<AppState>>` — cheap to
//! clone and safe to share across tasks.

use std::sync::{Arc, Mutex};

use crate::config::AppConfig;

// ---------------------------------------------------------------------------
// DisplayState
// ---------------------------------------------------------------------------

/// States of the translation output region.
///
/// The state machine transitions are:
///
/// ```text
/// Idle ──submit──▶ Pending
/// Pending ──reply with translation──▶ Success
///         ──reply with error / transport failure──▶ Error
/// Success / Error ──submit──▶ Pending
/// ```
///
/// The slot holds exactly one value at a time and always reflects the most
/// recently issued request; stale responses never overwrite it (see the
/// orchestrator's sequence-number guard).
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayState {
    /// No request has been issued yet; the output region is empty.
    Idle,

    /// A request is in flight; the pending indicator is displayed.
    Pending,

    /// The service replied with a translation, rendered verbatim.
    Success(String),

    /// The request ended in an application or transport error; the message
    /// carries its distinguishing prefix (`"Error: "` or
    /// `"Request failed: "`).
    Error(String),
}

impl DisplayState {
    /// The exact text rendered into the output region for this state.
    ///
    /// ```
    /// use translate_widget::orchestrator::DisplayState;
    ///
    /// assert_eq!(DisplayState::Idle.text(), "");
    /// assert_eq!(DisplayState::Pending.text(), "Translating...");
    /// assert_eq!(DisplayState::Success("Bonjour".into()).text(), "Bonjour");
    /// ```
    pub fn text(&self) -> &str {
        match self {
            DisplayState::Idle => "",
            DisplayState::Pending => "Translating...",
            DisplayState::Success(text) => text,
            DisplayState::Error(message) => message,
        }
    }

    /// Returns `true` while a request is outstanding.
    pub fn is_busy(&self) -> bool {
        matches!(self, DisplayState::Pending)
    }

    /// A short human-readable label suitable for display in the title bar.
    pub fn label(&self) -> &'static str {
        match self {
            DisplayState::Idle => "Idle",
            DisplayState::Pending => "Translating",
            DisplayState::Success(_) => "Done",
            DisplayState::Error(_) => "Error",
        }
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        DisplayState::Idle
    }
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// Shared application state — the single source of truth for the UI.
///
/// Held behind [`SharedState`] (`Arc<Mutex<AppState>>`).  The orchestrator
/// mutates it; the egui update loop reads it each frame.
pub struct AppState {
    /// Current state of the output region.
    pub display: DisplayState,

    /// Sequence number of the most recently issued request.  `0` before any
    /// request has been submitted.  A response may only write `display`
    /// while its own sequence number still equals this value.
    pub current_seq: u64,

    /// Current application configuration.
    pub config: AppConfig,
}

impl AppState {
    /// Create a new `AppState` in the `Idle` state.
    pub fn new(config: AppConfig) -> Self {
        Self {
            display: DisplayState::Idle,
            current_seq: 0,
            config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

// ---------------------------------------------------------------------------
// SharedState
// ---------------------------------------------------------------------------

/// Thread-safe handle to [`AppState`].
///
/// Cheap to clone (`Arc` clone).  Lock with `.lock().unwrap()` for a short
/// critical section; do **not** hold the lock across `.await` points.
pub type SharedState = Arc<Mutex<AppState>>;

/// Construct a new [`SharedState`] wrapping a default-idle [`AppState`].
pub fn new_shared_state(config: AppConfig) -> SharedState {
    Arc::new(Mutex::new(AppState::new(config)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
