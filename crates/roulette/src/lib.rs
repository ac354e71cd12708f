use bevy::prelude::*;

pub mod config;
pub mod map_link;
pub mod rng;
pub mod spin;
pub mod stations;

#[cfg(test)]
pub mod test_harness;

/// Everything the roulette needs headless: the seeded RNG, the station pool
/// loaded at startup, and the event-driven spin session.
pub struct RoulettePlugin;

impl Plugin for RoulettePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            rng::SpinRngPlugin,
            stations::StationsPlugin,
            spin::SpinPlugin,
        ));
    }
}
