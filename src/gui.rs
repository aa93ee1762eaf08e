use crate::settings::Settings;
use crate::watermark::controller::SettingsController;
use crate::watermark::overlay::ViewportOverlayFactory;
use crate::watermark::settings_ui::{render_watermark_form, FormEvent};
use eframe::egui;
use std::path::PathBuf;

/// Options for the settings window.
///
/// The root viewport asks for a transparent framebuffer because the glow
/// backend picks one GL config for every window from it, and the overlay
/// windows need alpha. The settings panel itself paints an opaque fill.
pub fn native_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Screen Watermark")
            .with_inner_size([350.0, 400.0])
            .with_min_inner_size([320.0, 360.0])
            .with_transparent(true),
        ..Default::default()
    }
}

pub struct WatermarkApp {
    pub controller: SettingsController<ViewportOverlayFactory>,
    settings: Settings,
    settings_path: PathBuf,
    persisted: bool,
}

impl WatermarkApp {
    pub fn new(settings: Settings, settings_path: PathBuf) -> Self {
        let controller =
            SettingsController::new(settings.watermark.clone(), ViewportOverlayFactory::default());
        Self {
            controller,
            settings,
            settings_path,
            persisted: false,
        }
    }

    pub fn settings_path(&self) -> &PathBuf {
        &self.settings_path
    }

    pub fn handle_form_event(&mut self, event: FormEvent) {
        match event {
            FormEvent::Edit(edit) => self.controller.update(edit),
            FormEvent::PickColor(color) => self.controller.set_color(color),
            FormEvent::SetLivePreview(enabled) => self.controller.set_live_preview(enabled),
            FormEvent::Apply => self.controller.apply(),
            FormEvent::Remove => self.controller.remove(),
        }
    }

    /// Close handler for the settings window: hides the watermark and saves
    /// the panel values once.
    pub fn handle_close(&mut self) {
        self.controller.close();
        if self.persisted {
            return;
        }
        self.persisted = true;
        self.settings.watermark = self.controller.settings().clone();
        if let Err(err) = self.settings.save(&self.settings_path) {
            tracing::warn!(?err, "failed to save watermark settings");
        }
    }

    /// One frame of the settings window plus the live overlay.
    pub fn ui(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.viewport().close_requested()) {
            tracing::debug!("settings window close requested");
            self.handle_close();
        }

        let monitor_size = ctx.input(|i| i.viewport().monitor_size);
        self.controller
            .factory_mut()
            .observe_monitor_size(monitor_size);

        let mut events = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Screen Watermark");
            ui.separator();
            events = render_watermark_form(
                ui,
                self.controller.settings(),
                self.controller.color_preview(),
            );
        });

        for event in events {
            self.handle_form_event(event);
        }

        if let Some(overlay) = self.controller.overlay() {
            overlay.show(ctx);
        }
    }
}

impl eframe::App for WatermarkApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        // The overlay viewport shares this clear color and must stay see-through.
        [0.0, 0.0, 0.0, 0.0]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.handle_close();
    }
}
