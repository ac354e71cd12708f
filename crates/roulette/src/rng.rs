//! Deterministic spin RNG resource.
//!
//! Wraps `ChaCha8Rng` so target selection and deck shuffling are reproducible
//! under a fixed seed. Systems take `ResMut<SpinRng>` instead of reaching for
//! `rand::thread_rng()`; replaying a seed replays the whole spin.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// RNG behind all spin randomness.
///
/// The default instance seeds from the system clock so every launch lands
/// somewhere new; tests and the `STATION_ROULETTE_SEED` override go through
/// [`SpinRng::from_seed_u64`] for reproducible sequences.
#[derive(Resource)]
pub struct SpinRng(pub ChaCha8Rng);

impl Default for SpinRng {
    fn default() -> Self {
        Self::from_seed_u64(time_seed())
    }
}

impl SpinRng {
    /// Create a new `SpinRng` seeded from the given `u64` value.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

/// Derive a seed from the current system time.
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(42)
}

pub struct SpinRngPlugin;

impl Plugin for SpinRngPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpinRng>();
    }
}
