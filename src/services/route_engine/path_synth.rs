use crate::constants::{
    COORDINATE_DECIMALS, END_SYNTH_DIVISOR, PATH_DETOUR_FACTOR, PATH_OSCILLATION_DIVISOR,
    PATH_POINTS,
};
use crate::models::{Coordinates, RunMode};
use rand::Rng;

/// Raw geometry for one synthesized point-to-point route.
pub struct PathGeometry {
    /// 9 points: the start, 7 oscillating interior points, the end.
    pub waypoints: Vec<Coordinates>,
    pub start: Coordinates,
    pub end: Coordinates,
    pub distance_km: f64,
    pub elevation_gain_m: u32,
}

/// Interpolate a winding path from `start` to `end`.
///
/// With a resolved end point the usable distance is floored at 1.2x the
/// direct great-circle line (a running route is never the straight line).
/// Without one, an end point is synthesized by perturbing the start and the
/// requested distance is kept unadjusted. Interior points oscillate around
/// the direct line with a mode-scaled sinusoid; endurance paths run
/// straighter than conditioning paths.
pub fn synthesize<R: Rng>(
    start: Coordinates,
    end: Option<Coordinates>,
    target_distance_km: f64,
    mode: RunMode,
    rng: &mut R,
) -> PathGeometry {
    let start = start.round(COORDINATE_DECIMALS);

    let (end, adjusted_km) = match end {
        Some(end) => {
            let end = end.round(COORDINATE_DECIMALS);
            let direct_km = start.distance_to(&end);
            (end, target_distance_km.max(direct_km * PATH_DETOUR_FACTOR))
        }
        None => {
            let spread = target_distance_km / END_SYNTH_DIVISOR;
            let synthesized = Coordinates {
                lat: start.lat + rng.random_range(-spread..=spread),
                lng: start.lng + rng.random_range(-spread..=spread),
            };
            (synthesized.round(COORDINATE_DECIMALS), target_distance_km)
        }
    };

    let complexity = mode.path_complexity();
    let amplitude = adjusted_km / PATH_OSCILLATION_DIVISOR;
    let segments = (PATH_POINTS - 1) as f64;

    let mut waypoints = Vec::with_capacity(PATH_POINTS);
    waypoints.push(start);
    for i in 1..PATH_POINTS - 1 {
        let progress = i as f64 / segments;
        let phase = progress * std::f64::consts::PI * complexity;

        let waypoint = Coordinates {
            lat: start.lat
                + (end.lat - start.lat) * progress
                + phase.sin() * amplitude * rng.random_range(-1.0..=1.0),
            lng: start.lng
                + (end.lng - start.lng) * progress
                + phase.cos() * amplitude * rng.random_range(-1.0..=1.0),
        };
        waypoints.push(waypoint.round(COORDINATE_DECIMALS));
    }
    waypoints.push(end);

    PathGeometry {
        waypoints,
        start,
        end,
        distance_km: super::jittered_distance_km(adjusted_km, rng),
        elevation_gain_m: rng.random_range(mode.path_elevation_range()),
    }
}
