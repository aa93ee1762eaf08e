use crate::watermark::model::WatermarkColor;
use crate::watermark::overlay::{OverlayFactory, OverlaySurface};
use crate::watermark::settings::{
    clamp_angle, clamp_font_size, clamp_opacity_percent, clamp_spacing, WatermarkSettings,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    NoOverlay,
    OverlayActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerLifecycle {
    Open,
    Closed,
}

/// One edited field of the settings panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingEdit {
    Text(String),
    FontSize(u32),
    OpacityPercent(u8),
    Angle(i32),
    Spacing(u32),
    Color(WatermarkColor),
}

/// What the color button shows for the current color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPreview {
    pub swatch: WatermarkColor,
    pub label_color: WatermarkColor,
    pub label: String,
}

impl ColorPreview {
    pub fn for_color(color: WatermarkColor) -> Self {
        Self {
            swatch: color,
            label_color: color.preview_text_color(),
            label: color.to_hex(),
        }
    }
}

/// Holds the panel values and owns the single live overlay, if any.
pub struct SettingsController<F: OverlayFactory> {
    settings: WatermarkSettings,
    factory: F,
    overlay: Option<F::Surface>,
    color_preview: ColorPreview,
    lifecycle: ControllerLifecycle,
}

impl<F: OverlayFactory> SettingsController<F> {
    pub fn new(mut settings: WatermarkSettings, factory: F) -> Self {
        settings.sanitize();
        let color_preview = ColorPreview::for_color(settings.color);
        Self {
            settings,
            factory,
            overlay: None,
            color_preview,
            lifecycle: ControllerLifecycle::Open,
        }
    }

    pub fn settings(&self) -> &WatermarkSettings {
        &self.settings
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }

    pub fn overlay(&self) -> Option<&F::Surface> {
        self.overlay.as_ref()
    }

    pub fn color_preview(&self) -> &ColorPreview {
        &self.color_preview
    }

    pub fn lifecycle(&self) -> ControllerLifecycle {
        self.lifecycle
    }

    pub fn is_closed(&self) -> bool {
        self.lifecycle == ControllerLifecycle::Closed
    }

    pub fn state(&self) -> OverlayState {
        if self.overlay.is_some() {
            OverlayState::OverlayActive
        } else {
            OverlayState::NoOverlay
        }
    }

    pub fn live_preview(&self) -> bool {
        self.settings.live_preview
    }

    pub fn set_live_preview(&mut self, enabled: bool) {
        self.settings.live_preview = enabled;
    }

    /// Record one edited value; regenerate the overlay when live preview is
    /// on and an overlay is showing.
    pub fn update(&mut self, edit: SettingEdit) {
        if self.ignore_after_close("update") {
            return;
        }

        tracing::debug!(?edit, "watermark setting edited");
        match edit {
            SettingEdit::Text(text) => self.settings.text = text,
            SettingEdit::FontSize(size) => self.settings.font_size = clamp_font_size(size),
            SettingEdit::OpacityPercent(pct) => {
                self.settings.opacity_percent = clamp_opacity_percent(pct)
            }
            SettingEdit::Angle(angle) => self.settings.angle = clamp_angle(angle),
            SettingEdit::Spacing(spacing) => self.settings.spacing = clamp_spacing(spacing),
            SettingEdit::Color(color) => self.settings.color = color,
        }

        if self.settings.live_preview && self.overlay.is_some() {
            // Every edit closes and recreates the overlay window.
            self.apply();
        }
    }

    pub fn set_color(&mut self, color: WatermarkColor) {
        if self.ignore_after_close("set_color") {
            return;
        }
        self.color_preview = ColorPreview::for_color(color);
        self.update(SettingEdit::Color(color));
    }

    /// Show the watermark with the current values, replacing any overlay.
    pub fn apply(&mut self) {
        if self.ignore_after_close("apply") {
            return;
        }

        let parameters = self.settings.parameters();
        if !parameters.has_text() {
            self.remove();
            return;
        }

        if let Some(mut previous) = self.overlay.take() {
            previous.close();
        }
        tracing::info!(
            text = %parameters.text,
            font_size = parameters.font_size,
            angle = parameters.angle,
            spacing = parameters.spacing,
            alpha = parameters.alpha(),
            "showing watermark"
        );
        self.overlay = Some(self.factory.create(parameters));
    }

    /// Hide the watermark. No-op when nothing is showing.
    pub fn remove(&mut self) {
        if let Some(mut overlay) = self.overlay.take() {
            overlay.close();
            tracing::info!("watermark hidden");
        }
    }

    /// Settings window dismissed: hide the watermark and stop accepting edits.
    pub fn close(&mut self) {
        self.remove();
        if !self.is_closed() {
            tracing::debug!("settings controller closed");
            self.lifecycle = ControllerLifecycle::Closed;
        }
    }

    fn ignore_after_close(&self, operation: &str) -> bool {
        if self.is_closed() {
            tracing::warn!(operation, "ignoring call on closed settings controller");
            true
        } else {
            false
        }
    }
}

impl<F: OverlayFactory> Drop for SettingsController<F> {
    fn drop(&mut self) {
        self.remove();
    }
}
