//! The browsable cloud of candidate stations under the wheel.

use bevy_egui::egui;

use roulette::config::STATION_CLOUD_LIMIT;

use crate::theme::{self, Palette};

/// Slice of the pool the cloud renders. Oversized pools get cut off rather
/// than scrolled forever.
pub fn visible_stations(names: &[String]) -> &[String] {
    &names[..names.len().min(STATION_CLOUD_LIMIT)]
}

/// Wrapped grid of candidate names with the currently shown one highlighted.
pub fn render_station_cloud(
    ui: &mut egui::Ui,
    palette: &Palette,
    names: &[String],
    current: Option<&str>,
) {
    egui::ScrollArea::vertical()
        .max_height(220.0)
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(10.0, 6.0);
                for name in visible_stations(names) {
                    let highlighted = current == Some(name.as_str());
                    let text = if highlighted {
                        egui::RichText::new(name)
                            .size(theme::FONT_SMALL)
                            .color(palette.accent)
                            .strong()
                    } else {
                        egui::RichText::new(name)
                            .size(theme::FONT_SMALL)
                            .color(palette.text_muted)
                    };
                    ui.label(text);
                }
            });
        });
}
