//! Translate Widget — a small desktop front-end for a remote translation
//! service.
//!
//! The user types text into the widget, presses **Translate**, and the
//! current contents of the result region track the outcome of the request:
//! a pending indicator while the call is in flight, the translated text on
//! success, or a prefixed error message on failure.
//!
//! # Modules
//!
//! * [`config`]       — `AppConfig` + TOML persistence, `AppPaths`.
//! * [`client`]       — `TranslateClient` trait and the reqwest-backed
//!   `HttpTranslateClient`.
//! * [`orchestrator`] — the request/response state machine and its shared
//!   state, read by the UI each frame.
//! * [`app`]          — the egui/eframe window.

pub mod app;
pub mod client;
pub mod config;
pub mod orchestrator;
