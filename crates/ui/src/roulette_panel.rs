//! The single-screen roulette panel: display line, progress bar, transport
//! controls, and the station cloud.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use roulette::map_link::station_map_url;
use roulette::spin::{SpinControlEvent, SpinPhase, SpinSession};
use roulette::stations::StationPool;

use crate::station_cloud::render_station_cloud;
use crate::theme::{self, Palette, UiTheme};
use crate::ui_widgets::{caption, progress_bar, section_separator, themed_heading};

/// What the big line says for a given session state.
fn display_line(session: &SpinSession) -> String {
    if session.is_done() {
        format!("We are going to {}", session.display_name())
    } else {
        session.display_name().to_string()
    }
}

/// The big line's color: landed green, mid-spin muted, idle plain.
fn display_color(palette: &Palette, phase: SpinPhase) -> egui::Color32 {
    match phase {
        SpinPhase::Done => palette.success,
        SpinPhase::Running => palette.text_muted,
        SpinPhase::Idle => palette.text,
    }
}

pub fn roulette_panel_ui(
    mut contexts: EguiContexts,
    ui_theme: Res<UiTheme>,
    session: Res<SpinSession>,
    pool: Res<StationPool>,
    mut controls: EventWriter<SpinControlEvent>,
) {
    let palette = ui_theme.variant.palette();

    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            themed_heading(ui, &palette, "TRA Station Roulette");
            caption(
                ui,
                &palette,
                "One random station from the Taiwan Railway network",
            );
            ui.add_space(20.0);

            // ---- Slot window ----
            // While the wheel spins, faded rows hint at the reel above and
            // below the visible name. The landed name grows a size step.
            let reel_edge = egui::RichText::new("…")
                .size(theme::FONT_BODY)
                .color(palette.text_muted.gamma_multiply(0.5));
            if session.is_running() {
                ui.label(reel_edge.clone());
            }
            let size = if session.is_done() {
                theme::FONT_DISPLAY
            } else {
                theme::FONT_HEADING
            };
            let mut line = egui::RichText::new(display_line(&session))
                .size(size)
                .color(display_color(&palette, session.phase()));
            if session.is_done() {
                line = line.strong();
            }
            ui.label(line);
            if session.is_running() {
                ui.label(reel_edge);
            }
            ui.add_space(12.0);

            // ---- Progress ----
            let fill = session.is_done().then_some(palette.success);
            progress_bar(ui, &palette, session.progress(), fill);
            ui.add_space(16.0);

            // ---- Controls ----
            ui.horizontal(|ui| {
                let size = egui::vec2(96.0, 30.0);
                let gap = ui.spacing().item_spacing.x;
                let row = 3.0 * size.x + 2.0 * gap;
                ui.add_space(((ui.available_width() - row) / 2.0).max(0.0));

                let start_enabled = !session.is_running() && !pool.is_empty();
                let mut start = ui.add_enabled(
                    start_enabled,
                    egui::Button::new(egui::RichText::new("Start").size(theme::FONT_BODY))
                        .min_size(size),
                );
                if pool.is_empty() {
                    start = start.on_disabled_hover_text("No stations loaded");
                }
                if start.clicked() {
                    controls.send(SpinControlEvent::Start);
                }

                let stop = ui.add_enabled(
                    session.is_running(),
                    egui::Button::new(egui::RichText::new("Stop").size(theme::FONT_BODY))
                        .min_size(size),
                );
                if stop.clicked() {
                    controls.send(SpinControlEvent::Stop);
                }

                let reset = ui.add_enabled(
                    !session.is_running(),
                    egui::Button::new(egui::RichText::new("Reset").size(theme::FONT_BODY))
                        .min_size(size),
                );
                if reset.clicked() {
                    controls.send(SpinControlEvent::Reset);
                }
            });

            // ---- Map link, only once the wheel has landed ----
            if session.is_done() {
                if let Some(name) = session.current() {
                    ui.add_space(10.0);
                    ui.hyperlink_to(
                        egui::RichText::new("Open in Google Maps").size(theme::FONT_BODY),
                        station_map_url(name),
                    );
                }
            }
        });

        // ---- Station cloud, full width ----
        section_separator(ui);
        caption(ui, &palette, &format!("{} stations in the pool", pool.len()));
        ui.add_space(4.0);
        render_station_cloud(ui, &palette, &pool.names, session.current());
    });
}
