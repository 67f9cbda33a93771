//! Presentational metadata for generated routes.
//!
//! All lookups are deterministic in (mode, route index): the index cycles
//! through small fixed vocabularies, so alternatives within one batch read
//! differently while repeated requests stay stable for a given slot.

use crate::constants::{PACE_MIN_PER_KM_HIGH, PACE_MIN_PER_KM_LOW};
use crate::models::RunMode;

const ENDURANCE_DIFFICULTIES: [&str; 2] = ["Easy", "Moderate"];
const CONDITIONING_DIFFICULTIES: [&str; 2] = ["Moderate", "Challenging"];

const ENDURANCE_TERRAINS: [&str; 3] = ["Paved", "Mixed", "Smooth Trail"];
const CONDITIONING_TERRAINS: [&str; 3] = ["Mixed", "Trail", "Varied"];

const LOOP_DESCRIPTIONS: [&str; 4] = [
    "Scenic loop with park views",
    "Urban loop passing local landmarks",
    "Quiet circuit on neighborhood streets",
    "Mixed loop through parks and residential areas",
];

const PATH_DESCRIPTIONS: [&str; 4] = [
    "Direct run along main streets",
    "Winding route through side streets",
    "Steady stretch passing local landmarks",
    "Varied course across mixed neighborhoods",
];

pub fn route_name(route_index: u32) -> String {
    format!("Route {}", route_index + 1)
}

pub fn difficulty(mode: RunMode, route_index: u32) -> &'static str {
    let vocabulary = match mode {
        RunMode::Endurance => &ENDURANCE_DIFFICULTIES,
        RunMode::Conditioning => &CONDITIONING_DIFFICULTIES,
    };
    vocabulary[route_index as usize % vocabulary.len()]
}

pub fn terrain(mode: RunMode, route_index: u32) -> &'static str {
    let vocabulary = match mode {
        RunMode::Endurance => &ENDURANCE_TERRAINS,
        RunMode::Conditioning => &CONDITIONING_TERRAINS,
    };
    vocabulary[route_index as usize % vocabulary.len()]
}

pub fn description(mode: RunMode, is_loop: bool, route_index: u32) -> String {
    if is_loop {
        let base = LOOP_DESCRIPTIONS[route_index as usize % LOOP_DESCRIPTIONS.len()];
        let suffix = match mode {
            RunMode::Endurance => "and gentle hills",
            RunMode::Conditioning => "with varied elevation",
        };
        format!("{} {}", base, suffix)
    } else {
        let base = PATH_DESCRIPTIONS[route_index as usize % PATH_DESCRIPTIONS.len()];
        let suffix = match mode {
            RunMode::Endurance => "mostly flat terrain",
            RunMode::Conditioning => "challenging hills",
        };
        format!("{}, {}", base, suffix)
    }
}

/// Completion-time range assuming a 6-8 min/km recreational running pace.
pub fn estimated_time(distance_km: f64) -> String {
    let low = (distance_km * PACE_MIN_PER_KM_LOW) as u32;
    let high = (distance_km * PACE_MIN_PER_KM_HIGH) as u32;
    format!("{}-{} min", low, high)
}
