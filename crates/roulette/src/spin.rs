//! The spin engine: a decelerating roulette over the station pool.
//!
//! A spin is a fixed-length deck of station names revealed one per tick, with
//! the gap between ticks growing geometrically so the reveal starts frantic
//! and eases to a stop. The last deck slot is forced to a uniformly chosen
//! target, so the roulette always lands on the predrawn winner. The session
//! is a plain resource driven by [`SpinControlEvent`]s from the UI and by
//! frame time; the pending tick lives inside the session as an [`Option<Timer>`]
//! so stop and reset cancel it by clearing the field.

use bevy::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

use crate::config::{
    DEFAULT_BASE_DELAY_MS, DEFAULT_GROWTH, DEFAULT_MAX_DELAY_MS, DEFAULT_TICKS, IDLE_PLACEHOLDER,
    SPINNING_PLACEHOLDER,
};
use crate::rng::SpinRng;
use crate::stations::StationPool;

// =============================================================================
// Tuning
// =============================================================================

/// Pace parameters for a spin, fixed when the session starts.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SpinTuning {
    /// Number of reveals per spin. Also the deck length.
    pub ticks: usize,
    /// Gap before the first reveal, in milliseconds.
    pub base_delay_ms: f32,
    /// Per-tick multiplier on the gap. Values above 1 decelerate the spin.
    pub growth: f32,
    /// Ceiling on any single gap, in milliseconds.
    pub max_delay_ms: f32,
}

impl Default for SpinTuning {
    fn default() -> Self {
        Self {
            ticks: DEFAULT_TICKS,
            base_delay_ms: DEFAULT_BASE_DELAY_MS,
            growth: DEFAULT_GROWTH,
            max_delay_ms: DEFAULT_MAX_DELAY_MS,
        }
    }
}

impl SpinTuning {
    /// Precompute the gap before each tick: `base * growth^i`, capped at
    /// `max_delay_ms`. Non-decreasing for `growth >= 1`.
    pub fn delay_schedule(&self) -> Vec<Duration> {
        (0..self.ticks)
            .map(|i| {
                let ms = (self.base_delay_ms * self.growth.powi(i as i32)).min(self.max_delay_ms);
                // Quantize via integer microseconds so equal tunings always
                // produce bit-equal schedules.
                Duration::from_micros((ms * 1000.0).round() as u64)
            })
            .collect()
    }
}

// =============================================================================
// Deck
// =============================================================================

/// Build the reveal deck: whole-pool shuffles concatenated until `ticks`
/// entries exist, truncated, with the last slot overwritten by `target`.
///
/// Per-round shuffling keeps short spins visually varied even when the pool
/// is smaller than the tick count. Empty pools and zero-tick spins yield an
/// empty deck; callers refuse to start on those.
pub fn build_deck<R: Rng>(pool: &[String], ticks: usize, target: &str, rng: &mut R) -> Vec<String> {
    if pool.is_empty() || ticks == 0 {
        return Vec::new();
    }
    let mut deck = Vec::with_capacity(ticks + pool.len());
    while deck.len() < ticks {
        let mut round = pool.to_vec();
        round.shuffle(rng);
        deck.extend(round);
    }
    deck.truncate(ticks);
    if let Some(last) = deck.last_mut() {
        *last = target.to_string();
    }
    deck
}

// =============================================================================
// Session
// =============================================================================

/// Lifecycle of a spin session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinPhase {
    /// No spin underway. Either fresh, reset, or stopped mid-spin.
    #[default]
    Idle,
    /// Ticks are firing; a pending timer is armed.
    Running,
    /// The deck is exhausted and the target is on display.
    Done,
}

/// One roulette run. All mutation goes through [`start`](Self::start),
/// [`stop`](Self::stop), [`reset`](Self::reset), and
/// [`advance`](Self::advance), which keep the phase, deck cursor, and pending
/// timer consistent.
#[derive(Resource, Debug, Clone, PartialEq, Default)]
pub struct SpinSession {
    phase: SpinPhase,
    /// Last revealed name. `None` until the first tick of the first spin.
    current: Option<String>,
    /// Next deck slot to reveal while running; last revealed slot once done.
    index: usize,
    target: Option<String>,
    deck: Vec<String>,
    delays: Vec<Duration>,
    /// The armed gap before the next reveal. `None` whenever not running,
    /// which is what makes stop and reset cancel outstanding ticks.
    pending: Option<Timer>,
}

impl SpinSession {
    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == SpinPhase::Running
    }

    pub fn is_done(&self) -> bool {
        self.phase == SpinPhase::Done
    }

    /// Last revealed station, if any tick has fired since the last reset.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// The predrawn winner for the active or finished spin.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn deck(&self) -> &[String] {
        &self.deck
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Text for the big display line, placeholder-aware.
    pub fn display_name(&self) -> &str {
        match self.phase {
            SpinPhase::Idle => self.current.as_deref().unwrap_or(IDLE_PLACEHOLDER),
            SpinPhase::Running => self.current.as_deref().unwrap_or(SPINNING_PLACEHOLDER),
            SpinPhase::Done => self.current.as_deref().unwrap_or_default(),
        }
    }

    /// Fraction of the deck revealed, in `[0, 1]`. Counts the final reveal
    /// only once the phase flips to done, so a running spin never reads 1.0.
    pub fn progress(&self) -> f32 {
        if self.deck.is_empty() {
            return 0.0;
        }
        let done = usize::from(self.phase == SpinPhase::Done);
        (((self.index + done) as f32) / self.deck.len() as f32).min(1.0)
    }

    /// Begin a spin: draw the target, build the deck and schedule, arm the
    /// first gap. Refused (returning `false`) while already running, or when
    /// the pool or tick count cannot produce a deck.
    pub fn start<R: Rng>(&mut self, pool: &[String], tuning: &SpinTuning, rng: &mut R) -> bool {
        if self.is_running() {
            return false;
        }
        if pool.is_empty() {
            warn!("spin refused: station pool is empty");
            return false;
        }
        if tuning.ticks == 0 {
            warn!("spin refused: tick count is zero");
            return false;
        }
        let target = pool[rng.gen_range(0..pool.len())].clone();
        self.deck = build_deck(pool, tuning.ticks, &target, rng);
        self.delays = tuning.delay_schedule();
        self.target = Some(target);
        self.index = 0;
        self.current = None;
        self.phase = SpinPhase::Running;
        self.arm(0);
        true
    }

    /// Abandon a running spin, keeping the last revealed name on display.
    /// Returns `false` when there is nothing to stop.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.phase = SpinPhase::Idle;
        self.pending = None;
        true
    }

    /// Drop everything back to the initial state, from any phase.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Feed frame time into the pending gap. Fires at most one reveal per
    /// call; leftover delta is discarded, matching one-shot timer semantics
    /// where the next gap starts counting from its reveal.
    pub fn advance(&mut self, delta: Duration) {
        if !self.is_running() {
            return;
        }
        let Some(timer) = self.pending.as_mut() else {
            return;
        };
        timer.tick(delta);
        if timer.finished() {
            self.fire_tick();
        }
    }

    fn fire_tick(&mut self) {
        if let Some(name) = self.deck.get(self.index) {
            self.current = Some(name.clone());
        }
        let next = self.index + 1;
        if next >= self.deck.len() {
            self.phase = SpinPhase::Done;
            self.pending = None;
        } else {
            self.index = next;
            self.arm(next);
        }
    }

    fn arm(&mut self, slot: usize) {
        let delay = self.delays.get(slot).copied().unwrap_or_default();
        self.pending = Some(Timer::new(delay, TimerMode::Once));
    }
}

// =============================================================================
// Events & Systems
// =============================================================================

/// Control requests from the UI (or tests). Applied in arrival order, once
/// per frame, before the session consumes that frame's delta.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinControlEvent {
    Start,
    Stop,
    Reset,
}

pub fn apply_spin_controls(
    mut events: EventReader<SpinControlEvent>,
    mut session: ResMut<SpinSession>,
    pool: Res<StationPool>,
    tuning: Res<SpinTuning>,
    mut rng: ResMut<SpinRng>,
) {
    for event in events.read() {
        match event {
            SpinControlEvent::Start => {
                if session.start(&pool.names, &tuning, &mut rng.0) {
                    info!(
                        "spin started: {} ticks, landing on {:?}",
                        session.deck().len(),
                        session.target()
                    );
                }
            }
            SpinControlEvent::Stop => {
                if session.stop() {
                    info!("spin stopped at {:?}", session.current());
                }
            }
            SpinControlEvent::Reset => {
                session.reset();
            }
        }
    }
}

pub fn drive_spin_session(time: Res<Time>, mut session: ResMut<SpinSession>) {
    session.advance(time.delta());
}

// =============================================================================
// Plugin
// =============================================================================

pub struct SpinPlugin;

impl Plugin for SpinPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpinTuning>()
            .init_resource::<SpinSession>()
            .add_event::<SpinControlEvent>()
            .add_systems(Update, (apply_spin_controls, drive_spin_session).chain());
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
