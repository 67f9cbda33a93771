use crate::constants::{COORDINATE_DECIMALS, LOOP_RADIUS_DIVISOR, LOOP_SEGMENTS};
use crate::models::{Coordinates, RunMode};
use rand::Rng;

/// Raw geometry for one synthesized loop route.
pub struct LoopGeometry {
    /// 13 points: one per angular segment plus a closing duplicate of the
    /// first point.
    pub waypoints: Vec<Coordinates>,
    pub center: Coordinates,
    pub distance_km: f64,
    pub elevation_gain_m: u32,
}

/// Sweep an approximately circular footprint around `center`.
///
/// The route index scales an angular distortion factor, so alternatives
/// generated from the same center take visibly different shapes; the mode's
/// smoothness constant scales that distortion. Offsets are
/// `distance_km / 15` degrees per axis regardless of mode; mode affects
/// only shape irregularity and elevation, never footprint size.
pub fn synthesize<R: Rng>(
    center: Coordinates,
    target_distance_km: f64,
    mode: RunMode,
    route_index: u32,
    rng: &mut R,
) -> LoopGeometry {
    let center = center.round(COORDINATE_DECIMALS);
    let offset_deg = target_distance_km / LOOP_RADIUS_DIVISOR;
    let variation = 1.0 + route_index as f64 * 0.1 * mode.loop_smoothness();

    let mut waypoints = Vec::with_capacity(LOOP_SEGMENTS + 1);
    for i in 0..LOOP_SEGMENTS {
        let angle = (i as f64 / LOOP_SEGMENTS as f64) * std::f64::consts::TAU;
        let distorted = angle * variation;

        let waypoint = Coordinates {
            lat: center.lat + distorted.cos() * offset_deg,
            lng: center.lng + distorted.sin() * offset_deg,
        };
        waypoints.push(waypoint.round(COORDINATE_DECIMALS));
    }

    // Close the loop with an exact duplicate of the first point
    let first = waypoints[0];
    waypoints.push(first);

    LoopGeometry {
        waypoints,
        center,
        distance_km: super::jittered_distance_km(target_distance_km, rng),
        elevation_gain_m: rng.random_range(mode.loop_elevation_range()),
    }
}
