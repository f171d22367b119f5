//! Translation request orchestrator module.
//!
//! This module wires the submit → HTTP request → display-state cycle and
//! exposes the shared state that the UI reads every frame.
//!
//! # Architecture
//!
//! ```text
//! UiCommand::Submit (mpsc)
//!        │
//!        ▼
//! TranslateOrchestrator::run()  ← async tokio task
//!        │
//!        ├─ state = Pending, seq = n          (before any I/O)
//!        └─ spawn: client.translate(text)
//!              ├─ Ok  → Success(translation)   ┐ applied only while
//!              └─ Err → Error(user message)    ┘ seq is still current
//!
//! SharedState (Arc<Mutex<AppState>>) ←─── read by egui update() each frame
//! ```

pub mod runner;
pub mod state;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use runner::{TranslateOrchestrator, UiCommand};
pub use state::{new_shared_state, AppState, DisplayState, SharedState};
