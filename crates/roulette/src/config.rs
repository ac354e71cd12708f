//! Tuning and presentation constants shared across the engine and UI.
//!
//! The spin defaults reproduce the deployed feel: a fast start (10 ms between
//! jumps) decaying by 1.17x per tick up to a 1 s cap, over 150 ticks.

pub const DEFAULT_TICKS: usize = 150;
pub const DEFAULT_BASE_DELAY_MS: f32 = 10.0;
pub const DEFAULT_GROWTH: f32 = 1.17;
pub const DEFAULT_MAX_DELAY_MS: f32 = 1000.0;

/// Display value before the first spin and after a reset.
pub const IDLE_PLACEHOLDER: &str = "Press Start to begin";

/// Display value between `start` and the first tick.
pub const SPINNING_PLACEHOLDER: &str = "…";

/// Map search endpoint the landed station links to.
pub const MAP_SEARCH_BASE: &str = "https://www.google.com/maps";

/// Suffix appended to the station name before URL encoding, so the map query
/// reads "<name> 車站, 台灣" ("<name> station, Taiwan").
pub const MAP_QUERY_SUFFIX: &str = " 車站, 台灣";

/// Maximum number of stations the UI renders in the cloud grid.
pub const STATION_CLOUD_LIMIT: usize = 240;
