//! # TestSpin: headless harness for the roulette engine
//!
//! Wraps `bevy::app::App` + `RoulettePlugin` with manual time stepping, so
//! integration tests can drive whole spins frame by frame without a window.

use bevy::app::App;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

use crate::rng::SpinRng;
use crate::spin::{SpinControlEvent, SpinSession, SpinTuning};
use crate::stations::StationPool;
use crate::RoulettePlugin;

/// A headless Bevy App wrapping `RoulettePlugin` for integration testing.
///
/// Construct with a fixed seed, `send` control events, then `step_ms` to
/// advance frames whose deltas are exactly what the test dictates.
pub struct TestSpin {
    app: App,
}

impl TestSpin {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Seeded headless app with the embedded station dataset loaded by the
    /// startup system.
    pub fn new(seed: u64) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(RoulettePlugin);
        // Overwrite the time-seeded default before Startup runs.
        app.insert_resource(SpinRng::from_seed_u64(seed));
        // Virtual time caps a frame's delta at 250 ms by default, which
        // would silently shrink manual steps longer than that. Lift the cap
        // so a stepped frame delivers exactly the requested delta.
        app.world_mut()
            .resource_mut::<Time<Virtual>>()
            .set_max_delta(Duration::MAX);
        // First update executes Startup (dataset load) with a zero delta.
        app.update();
        Self { app }
    }

    /// Seeded app with an explicit raw station list and tuning in place of
    /// the embedded dataset. Raw names go through normal pool building.
    pub fn with_stations<S: AsRef<str>>(seed: u64, raw: &[S], tuning: SpinTuning) -> Self {
        let mut spin = Self::new(seed);
        spin.app.insert_resource(StationPool::from_raw(raw));
        spin.app.insert_resource(tuning);
        spin
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    /// Queue a control event for the next frame.
    pub fn send(&mut self, event: SpinControlEvent) {
        self.app.world_mut().send_event(event);
    }

    /// Advance one frame whose delta is exactly `delta`.
    pub fn step(&mut self, delta: Duration) {
        self.app
            .insert_resource(TimeUpdateStrategy::ManualDuration(delta));
        self.app.update();
    }

    pub fn step_ms(&mut self, ms: u64) {
        self.step(Duration::from_millis(ms));
    }

    pub fn send_and_step(&mut self, event: SpinControlEvent, ms: u64) {
        self.send(event);
        self.step_ms(ms);
    }

    /// Step with the schedule's longest gap until the session reports done.
    /// Each frame fires at most one reveal, so a full deck needs one frame
    /// per slot. Panics if the spin never finishes.
    pub fn run_to_completion(&mut self) {
        let stride = self
            .tuning()
            .delay_schedule()
            .into_iter()
            .max()
            .unwrap_or(Duration::from_millis(1));
        let limit = self.session().deck().len() + 8;
        for _ in 0..limit {
            if self.session().is_done() {
                return;
            }
            self.step(stride);
        }
        panic!(
            "spin still {:?} after {limit} frames",
            self.session().phase()
        );
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn session(&self) -> &SpinSession {
        self.app.world().resource::<SpinSession>()
    }

    pub fn pool(&self) -> &StationPool {
        self.app.world().resource::<StationPool>()
    }

    pub fn tuning(&self) -> &SpinTuning {
        self.app.world().resource::<SpinTuning>()
    }
}
