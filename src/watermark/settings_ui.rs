use crate::watermark::controller::{ColorPreview, SettingEdit};
use crate::watermark::model::WatermarkColor;
use crate::watermark::settings::{
    WatermarkSettings, MAX_ANGLE, MAX_FONT_SIZE, MAX_OPACITY_PERCENT, MAX_SPACING, MIN_ANGLE,
    MIN_FONT_SIZE, MIN_OPACITY_PERCENT, MIN_SPACING,
};
use eframe::egui;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Edit(SettingEdit),
    PickColor(WatermarkColor),
    SetLivePreview(bool),
    Apply,
    Remove,
}

/// Field edits needed to go from `before` to `after`, in form order.
///
/// Color and live preview are reported through their own events.
pub fn collect_edits(before: &WatermarkSettings, after: &WatermarkSettings) -> Vec<FormEvent> {
    let mut events = Vec::new();
    if before.text != after.text {
        events.push(FormEvent::Edit(SettingEdit::Text(after.text.clone())));
    }
    if before.font_size != after.font_size {
        events.push(FormEvent::Edit(SettingEdit::FontSize(after.font_size)));
    }
    if before.opacity_percent != after.opacity_percent {
        events.push(FormEvent::Edit(SettingEdit::OpacityPercent(
            after.opacity_percent,
        )));
    }
    if before.angle != after.angle {
        events.push(FormEvent::Edit(SettingEdit::Angle(after.angle)));
    }
    if before.spacing != after.spacing {
        events.push(FormEvent::Edit(SettingEdit::Spacing(after.spacing)));
    }
    if before.color != after.color {
        events.push(FormEvent::PickColor(after.color));
    }
    if before.live_preview != after.live_preview {
        events.push(FormEvent::SetLivePreview(after.live_preview));
    }
    events
}

fn to_color32(color: WatermarkColor) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

pub fn render_watermark_form(
    ui: &mut egui::Ui,
    settings: &WatermarkSettings,
    color_preview: &ColorPreview,
) -> Vec<FormEvent> {
    let mut edited = settings.clone();

    egui::Grid::new("watermark_form")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("Watermark text:");
            ui.text_edit_singleline(&mut edited.text);
            ui.end_row();

            ui.label("Font size:");
            ui.add(
                egui::DragValue::new(&mut edited.font_size)
                    .clamp_range(MIN_FONT_SIZE..=MAX_FONT_SIZE),
            );
            ui.end_row();

            ui.label("Opacity:");
            ui.add(
                egui::Slider::new(
                    &mut edited.opacity_percent,
                    MIN_OPACITY_PERCENT..=MAX_OPACITY_PERCENT,
                )
                .suffix("%"),
            );
            ui.end_row();

            ui.label("Rotation angle:");
            ui.add(egui::Slider::new(&mut edited.angle, MIN_ANGLE..=MAX_ANGLE).suffix("°"));
            ui.end_row();

            ui.label("Spacing:");
            ui.add(
                egui::DragValue::new(&mut edited.spacing)
                    .clamp_range(MIN_SPACING..=MAX_SPACING)
                    .suffix(" px"),
            );
            ui.end_row();

            ui.label("Color:");
            ui.horizontal(|ui| {
                let mut rgb = edited.color.to_rgb_array();
                if ui.color_edit_button_srgb(&mut rgb).changed() {
                    edited.color = WatermarkColor::from_rgb_array(rgb);
                }
                let label = egui::RichText::new(&color_preview.label)
                    .color(to_color32(color_preview.label_color))
                    .background_color(to_color32(color_preview.swatch))
                    .monospace();
                ui.label(label);
            });
            ui.end_row();
        });

    ui.add_space(8.0);
    ui.checkbox(&mut edited.live_preview, "Enable live preview");

    let mut events = collect_edits(settings, &edited);

    ui.add_space(8.0);
    ui.vertical_centered_justified(|ui| {
        if ui.button("Show / Update watermark").clicked() {
            events.push(FormEvent::Apply);
        }
        if ui.button("Hide watermark").clicked() {
            events.push(FormEvent::Remove);
        }
    });

    events
}

#[cfg(test)]
mod tests {
    use super::{collect_edits, FormEvent};
    use crate::watermark::controller::SettingEdit;
    use crate::watermark::model::WatermarkColor;
    use crate::watermark::settings::WatermarkSettings;

    #[test]
    fn unchanged_form_produces_no_events() {
        let settings = WatermarkSettings::default();
        assert!(collect_edits(&settings, &settings.clone()).is_empty());
    }

    #[test]
    fn changed_fields_are_reported_in_form_order() {
        let before = WatermarkSettings::default();
        let mut after = before.clone();
        after.spacing = 40;
        after.text = "DRAFT".into();
        after.color = WatermarkColor::rgb(255, 0, 0);
        after.live_preview = false;

        assert_eq!(
            collect_edits(&before, &after),
            vec![
                FormEvent::Edit(SettingEdit::Text("DRAFT".into())),
                FormEvent::Edit(SettingEdit::Spacing(40)),
                FormEvent::PickColor(WatermarkColor::rgb(255, 0, 0)),
                FormEvent::SetLivePreview(false),
            ]
        );
    }
}
