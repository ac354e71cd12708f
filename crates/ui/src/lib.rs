use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod fonts;
pub mod roulette_panel;
pub mod station_cloud;
pub mod theme;
pub mod ui_widgets;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<theme::UiTheme>()
            .add_systems(Startup, fonts::install_cjk_fonts)
            .add_systems(
                Update,
                (
                    theme::apply_theme.run_if(resource_changed::<theme::UiTheme>),
                    roulette_panel::roulette_panel_ui,
                )
                    .chain(),
            );
    }
}
