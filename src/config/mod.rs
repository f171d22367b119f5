//! Configuration module for Translate Widget.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for the translation
//! service and the UI, `AppPaths` for cross-platform config directories, and
//! TOML persistence via `AppConfig::load` / `AppConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, ServiceConfig, UiConfig};
