//! Translation service client module.
//!
//! This module provides:
//! * [`TranslateClient`] — async trait implemented by all client backends.
//! * [`HttpTranslateClient`] — reqwest-backed client for the `/translate`
//!   endpoint.
//! * [`TranslateError`] — error variants for translation requests.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use translate_widget::client::{HttpTranslateClient, TranslateClient};
//! use translate_widget::config::ServiceConfig;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = HttpTranslateClient::from_config(&ServiceConfig::default());
//!     match client.translate("Bonjour le monde").await {
//!         Ok(translation) => println!("{translation}"),
//!         Err(e) => eprintln!("{e}"),
//!     }
//! }
//! ```

pub mod api;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use api::{HttpTranslateClient, TranslateClient, TranslateError};

// test-only re-export so the orchestrator test module can import
// MockTranslateClient without `use translate_widget::client::api::…`.
#[cfg(test)]
pub use api::MockTranslateClient;
