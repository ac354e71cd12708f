//! Station name dataset: normalization, deduplication, and the startup pool.
//!
//! Raw names arrive as published: mixed 台/臺 spellings, stray whitespace,
//! parenthetical annotations, the occasional duplicate. One pass through
//! [`normalize_station_name`] and [`build_station_pool`] turns them into the
//! candidate list the spin engine draws from.

use bevy::prelude::*;
use std::collections::HashSet;

/// Embedded raw dataset: one JSON array of station name strings.
const RAW_STATIONS_JSON: &str = include_str!("../data/stations.json");

// =============================================================================
// Normalization
// =============================================================================

/// Canonicalize one raw station name.
///
/// Folds the legacy variant `台` to `臺`, strips all whitespace (including
/// full-width U+3000), and removes parenthetical spans in both full-width
/// `（…）` and ASCII `(…)` styles. Total and idempotent; may return an empty
/// string, which [`build_station_pool`] filters out.
pub fn normalize_station_name(raw: &str) -> String {
    let folded: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == '台' { '臺' } else { c })
        .collect();
    strip_parentheticals(&folded)
}

/// Remove `(…)` / `（…）` spans, shortest same-style match.
///
/// An opener with no matching closer later in the string is kept literally.
fn strip_parentheticals(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(open_at) = rest.find(['(', '（']) {
        let ascii = rest[open_at..].starts_with('(');
        let (opener_len, closer) = if ascii { (1, ')') } else { ('（'.len_utf8(), '）') };
        let after_opener = open_at + opener_len;
        match rest[after_opener..].find(closer) {
            Some(close_rel) => {
                out.push_str(&rest[..open_at]);
                rest = &rest[after_opener + close_rel + closer.len_utf8()..];
            }
            None => {
                out.push_str(&rest[..after_opener]);
                rest = &rest[after_opener..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Build the candidate list: normalize every raw name, drop empty results,
/// and deduplicate preserving first-seen order.
pub fn build_station_pool<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut pool = Vec::new();
    for name in raw {
        let canonical = normalize_station_name(name.as_ref());
        if canonical.is_empty() || !seen.insert(canonical.clone()) {
            continue;
        }
        pool.push(canonical);
    }
    pool
}

// =============================================================================
// Resource
// =============================================================================

/// The deduplicated candidate list, fixed once loaded at startup.
#[derive(Resource, Debug, Clone, Default)]
pub struct StationPool {
    /// Canonical station names in first-seen order.
    pub names: Vec<String>,
}

impl StationPool {
    /// Normalize and deduplicate a raw name list into a pool.
    pub fn from_raw<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: build_station_pool(raw),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

// =============================================================================
// Systems
// =============================================================================

/// Parse a raw dataset into its name array.
///
/// Malformed input is not fatal: it yields an empty list and the parse error
/// is logged once. An empty list flows into the refuse-at-`start` policy
/// downstream, with the UI disabling the button.
fn parse_raw_dataset(raw: &str) -> Vec<String> {
    match serde_json::from_str(raw) {
        Ok(names) => names,
        Err(e) => {
            warn!("station dataset failed to parse, starting with an empty pool: {e}");
            Vec::new()
        }
    }
}

/// Parse the embedded dataset into the pool.
pub fn load_station_pool(mut pool: ResMut<StationPool>) {
    let raw = parse_raw_dataset(RAW_STATIONS_JSON);
    let total = raw.len();
    pool.names = build_station_pool(raw);
    info!(
        "station pool ready: {} canonical names from {} raw entries",
        pool.len(),
        total
    );
}

// =============================================================================
// Plugin
// =============================================================================

pub struct StationsPlugin;

impl Plugin for StationsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StationPool>()
            .add_systems(Startup, load_station_pool);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
