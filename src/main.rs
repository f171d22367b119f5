//! Application entry point — Translate Widget.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Create [`tokio`] runtime (multi-thread, 2 workers).
//! 4. Build the HTTP client ([`HttpTranslateClient`]) from config.
//! 5. Create the command channel and shared state.
//! 6. Spawn the orchestrator on the tokio runtime.
//! 7. Run [`eframe::run_native`] — blocks the main thread until the window
//!    is closed.

use std::sync::Arc;

use tokio::sync::mpsc;
use translate_widget::{
    app::TranslateApp,
    client::{HttpTranslateClient, TranslateClient},
    config::AppConfig,
    orchestrator::{new_shared_state, TranslateOrchestrator, UiCommand},
};

use eframe::egui;

// ---------------------------------------------------------------------------
// Native options builder
// ---------------------------------------------------------------------------

fn native_options(config: &AppConfig) -> eframe::NativeOptions {
    let mut vp = egui::ViewportBuilder::default()
        .with_inner_size([420.0, 300.0])
        .with_min_inner_size([320.0, 220.0]);

    if config.ui.always_on_top {
        vp = vp.with_always_on_top();
    }

    if let Some((x, y)) = config.ui.window_position {
        vp = vp.with_position(egui::pos2(x, y));
    }

    eframe::NativeOptions {
        viewport: vp,
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> eframe::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Translate Widget starting up");

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });
    log::info!("translation service: {}", config.service.base_url);

    // 3. Tokio runtime (2 workers — requests may overlap)
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("failed to create tokio runtime");

    // 4. HTTP client
    let client: Arc<dyn TranslateClient> =
        Arc::new(HttpTranslateClient::from_config(&config.service));

    // 5. Channel + shared state
    let (command_tx, command_rx) = mpsc::channel::<UiCommand>(16);
    let shared_state = new_shared_state(config.clone());

    // 6. Spawn the orchestrator onto the tokio runtime
    {
        let orchestrator = TranslateOrchestrator::new(Arc::clone(&shared_state), client);
        rt.spawn(orchestrator.run(command_rx));
    }

    // 7. Build the egui app and run it (blocks until the window is closed)
    let app = TranslateApp::new(shared_state, command_tx);
    let options = native_options(&config);

    eframe::run_native(
        "Translate Widget",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
}
