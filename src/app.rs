//! Translate Widget window — egui/eframe application.
//!
//! # Architecture
//!
//! [`TranslateApp`] is the top-level [`eframe::App`].  It owns the input
//! field and the sender half of the command channel; the output region is a
//! read-only view of [`SharedState`], which the orchestrator mutates as
//! requests progress.
//!
//! The UI performs no validation and never disables the Translate button:
//! every click reads the input field at that moment and submits it as-is.
//!
//! # Widget states
//!
//! | State | Output region |
//! |-------|---------------|
//! | `Idle` | empty, dim hint above |
//! | `Pending` | `"Translating..."` — gray |
//! | `Success` | translated text — green |
//! | `Error` | prefixed message — orange |

use std::time::Duration;

use eframe::egui;
use tokio::sync::mpsc;

use crate::orchestrator::{DisplayState, SharedState, UiCommand};

// ---------------------------------------------------------------------------
// TranslateApp
// ---------------------------------------------------------------------------

/// eframe application — the translation widget window.
pub struct TranslateApp {
    /// Contents of the input text field.
    input: String,

    /// Shared state written by the orchestrator; the output region renders
    /// `display.text()` from it each frame.
    state: SharedState,

    /// Send commands to the background orchestrator.
    command_tx: mpsc::Sender<UiCommand>,
}

impl TranslateApp {
    /// Create a new [`TranslateApp`].
    ///
    /// * `state`      — shared state, also held by the orchestrator.
    /// * `command_tx` — sender end of the orchestrator command channel.
    pub fn new(state: SharedState, command_tx: mpsc::Sender<UiCommand>) -> Self {
        Self {
            input: String::new(),
            state,
            command_tx,
        }
    }

    /// Submit the current input field contents.
    ///
    /// Fire-and-forget: the outcome arrives through [`SharedState`].
    fn submit(&mut self) {
        log::debug!("ui: translate triggered ({} bytes)", self.input.len());
        let _ = self.command_tx.try_send(UiCommand::Submit {
            text: self.input.clone(),
        });
    }

    /// Accent colour for the current display state.
    fn state_color(state: &DisplayState) -> egui::Color32 {
        match state {
            DisplayState::Idle => egui::Color32::from_rgb(120, 120, 120),
            DisplayState::Pending => egui::Color32::from_rgb(160, 160, 160),
            DisplayState::Success(_) => egui::Color32::from_rgb(80, 200, 120),
            DisplayState::Error(_) => egui::Color32::from_rgb(255, 136, 68),
        }
    }
}

// ---------------------------------------------------------------------------
// eframe::App impl
// ---------------------------------------------------------------------------

impl eframe::App for TranslateApp {
    /// Called every frame by eframe.  Snapshots the shared state, then
    /// renders the input field, the trigger button, and the output region.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Short critical section: clone the display state out of the lock.
        let display = self.state.lock().unwrap().display.clone();

        // While a request is outstanding the orchestrator may write the
        // shared state at any time; poll for it.
        if display.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(66));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            // ── Status row ──────────────────────────────────────────────
            ui.horizontal(|ui| {
                ui.heading("Translate");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(display.label())
                            .color(Self::state_color(&display))
                            .size(12.0),
                    );
                });
            });
            ui.separator();

            // ── Input field ─────────────────────────────────────────────
            ui.add(
                egui::TextEdit::multiline(&mut self.input)
                    .desired_rows(4)
                    .desired_width(f32::INFINITY)
                    .hint_text("Enter text to translate"),
            );

            ui.add_space(4.0);

            // The button stays enabled in every state; a click during
            // Pending starts a second request and the freshness guard in
            // the orchestrator decides which response is displayed.
            if ui.button("Translate").clicked() {
                self.submit();
            }

            ui.add_space(8.0);
            ui.separator();

            // ── Output region ───────────────────────────────────────────
            // Overwritten (never appended) on every state transition; the
            // payload is rendered verbatim, with no escaping or formatting.
            ui.label(
                egui::RichText::new(display.text())
                    .color(Self::state_color(&display))
                    .size(14.0),
            );
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log::info!("translate widget closing");
    }
}
