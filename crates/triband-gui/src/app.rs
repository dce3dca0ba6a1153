//! Main application state and UI.

use crate::host::StandaloneHost;
use eframe::egui;
use std::time::Duration;
use triband_config::EditorConfig;
use triband_gui_core::{EqEditor, FontSet, PluginUi, RenderContext};

/// Standalone Triband window.
pub struct TribandApp {
    editor: EqEditor,
    host: StandaloneHost,
    fonts: FontSet,
    repaint_interval: Duration,
}

impl TribandApp {
    /// Create the app; `host` may already carry queued startup values.
    pub fn new(cc: &eframe::CreationContext<'_>, config: &EditorConfig, host: StandaloneHost) -> Self {
        cc.egui_ctx.set_zoom_factor(config.scale);
        tracing::info!(
            variant = %config.variant,
            release_policy = %config.release_policy,
            scale = config.scale,
            "editor ready"
        );

        Self {
            editor: EqEditor::new(config),
            host,
            fonts: FontSet::default(),
            repaint_interval: Duration::from_millis(config.repaint_interval_ms),
        }
    }

    /// Forward queued host notifications to the editor.
    fn sync_from_host(&mut self) {
        for (index, value) in self.host.drain_notifications() {
            self.editor.parameter_changed(index, value);
        }
    }
}

impl eframe::App for TribandApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_from_host();
        if self.editor.take_repaint_request() {
            ctx.request_repaint();
        }

        let rc = RenderContext {
            ctx,
            host: &self.host,
            fonts: &self.fonts,
        };
        self.editor.render(&rc);

        // Poll for automation from other threads
        ctx.request_repaint_after(self.repaint_interval);
    }
}
