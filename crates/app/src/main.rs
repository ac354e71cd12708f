use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use roulette::rng::SpinRng;
use roulette::RoulettePlugin;
use ui::theme::{ThemeVariant, UiTheme};
use ui::UiPlugin;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "TRA Station Roulette".to_string(),
            resolution: (900.0, 640.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .add_plugins((RoulettePlugin, UiPlugin));

    // Fixed seed for reproducing a run; time-seeded otherwise.
    if let Ok(raw) = std::env::var("STATION_ROULETTE_SEED") {
        match raw.parse::<u64>() {
            Ok(seed) => {
                info!("seeding spin rng from STATION_ROULETTE_SEED={seed}");
                app.insert_resource(SpinRng::from_seed_u64(seed));
            }
            Err(_) => warn!("ignoring non-numeric STATION_ROULETTE_SEED={raw:?}"),
        }
    }

    if let Ok(raw) = std::env::var("STATION_ROULETTE_THEME") {
        match ThemeVariant::from_name(&raw) {
            Some(variant) => {
                app.insert_resource(UiTheme { variant });
            }
            None => {
                warn!("ignoring unknown STATION_ROULETTE_THEME={raw:?} (expected tech or paper)")
            }
        }
    }

    app.run();
}
