use crate::watermark::model::WatermarkParameters;
use crate::watermark::render::paint_watermark;
use eframe::egui;

const FALLBACK_SCREEN_SIZE: egui::Vec2 = egui::vec2(1920.0, 1080.0);
const OVERLAY_TITLE: &str = "Screen Watermark Overlay";

/// Rendering surface for one watermark.
///
/// Implementations are expected to use a transparent, always-on-top window
/// that lets all input through to whatever is underneath.
pub trait OverlaySurface {
    fn parameters(&self) -> &WatermarkParameters;
    fn close(&mut self);
    fn is_closed(&self) -> bool;
}

pub trait OverlayFactory {
    type Surface: OverlaySurface;

    fn create(&mut self, parameters: WatermarkParameters) -> Self::Surface;
}

/// Overlay backed by an egui viewport.
///
/// Every instance has its own viewport id, so a replacement instance opens
/// a new native window and the old one closes once it stops being shown.
#[derive(Debug)]
pub struct OverlayWindow {
    viewport_id: egui::ViewportId,
    generation: u64,
    screen: egui::Rect,
    parameters: WatermarkParameters,
    closed: bool,
}

impl OverlayWindow {
    pub fn new(generation: u64, screen: egui::Rect, parameters: WatermarkParameters) -> Self {
        Self {
            viewport_id: egui::ViewportId::from_hash_of(("watermark_overlay", generation)),
            generation,
            screen,
            parameters,
            closed: false,
        }
    }

    pub fn viewport_id(&self) -> egui::ViewportId {
        self.viewport_id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn screen(&self) -> egui::Rect {
        self.screen
    }

    pub fn viewport_builder(&self) -> egui::ViewportBuilder {
        egui::ViewportBuilder::default()
            .with_title(OVERLAY_TITLE)
            .with_position(self.screen.min)
            .with_inner_size(self.screen.size())
            .with_decorations(false)
            .with_transparent(true)
            .with_always_on_top()
            .with_mouse_passthrough(true)
            .with_taskbar(false)
            .with_resizable(false)
    }

    /// Paint handler for the overlay surface.
    pub fn paint(&self, painter: &egui::Painter, canvas: egui::Rect) -> usize {
        paint_watermark(painter, canvas, &self.parameters)
    }

    /// Keep the overlay window alive for this frame. Must be called every
    /// frame while the instance is live.
    pub fn show(&self, ctx: &egui::Context) {
        if self.closed {
            return;
        }

        ctx.show_viewport_immediate(self.viewport_id, self.viewport_builder(), |ctx, class| {
            match class {
                egui::ViewportClass::Embedded => {
                    // No native window available: draw over the settings window.
                    let painter = ctx.layer_painter(egui::LayerId::new(
                        egui::Order::Foreground,
                        egui::Id::new(("watermark_overlay_layer", self.generation)),
                    ));
                    self.paint(&painter, ctx.screen_rect());
                }
                _ => {
                    egui::CentralPanel::default()
                        .frame(egui::Frame::none())
                        .show(ctx, |ui| {
                            self.paint(ui.painter(), ui.max_rect());
                        });
                }
            }
        });
    }
}

impl OverlaySurface for OverlayWindow {
    fn parameters(&self) -> &WatermarkParameters {
        &self.parameters
    }

    fn close(&mut self) {
        if !self.closed {
            tracing::debug!(generation = self.generation, "closing watermark overlay");
            self.closed = true;
        }
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

#[derive(Debug)]
pub struct ViewportOverlayFactory {
    next_generation: u64,
    screen: egui::Rect,
}

impl Default for ViewportOverlayFactory {
    fn default() -> Self {
        Self {
            next_generation: 0,
            screen: egui::Rect::from_min_size(egui::Pos2::ZERO, FALLBACK_SCREEN_SIZE),
        }
    }
}

impl ViewportOverlayFactory {
    pub fn screen(&self) -> egui::Rect {
        self.screen
    }

    /// Record the monitor size reported by the host. New overlays cover it.
    pub fn observe_monitor_size(&mut self, size: Option<egui::Vec2>) {
        if let Some(size) = size.filter(|s| s.x > 0.0 && s.y > 0.0) {
            self.screen = egui::Rect::from_min_size(egui::Pos2::ZERO, size);
        }
    }
}

impl OverlayFactory for ViewportOverlayFactory {
    type Surface = OverlayWindow;

    fn create(&mut self, parameters: WatermarkParameters) -> OverlayWindow {
        let generation = self.next_generation;
        self.next_generation += 1;
        tracing::debug!(
            generation,
            width = self.screen.width(),
            height = self.screen.height(),
            "creating watermark overlay"
        );
        OverlayWindow::new(generation, self.screen, parameters)
    }
}
