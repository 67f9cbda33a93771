//! Stable application-wide constants.
//!
//! Values here are structural invariants, algorithm coefficients, and default
//! fallbacks for env-var-based configuration. They should rarely change.
//! For knobs that benefit from runtime tuning, see
//! [`RouteEngineConfig`](crate::config::RouteEngineConfig) instead.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Geocoder defaults ---

/// Default Nominatim endpoint. Overridden by `GEOCODER_BASE_URL`.
pub const DEFAULT_GEOCODER_BASE_URL: &str = "https://nominatim.openstreetmap.org";
/// User-Agent sent to Nominatim (their usage policy requires one).
/// Overridden by `GEOCODER_USER_AGENT`.
pub const DEFAULT_GEOCODER_USER_AGENT: &str = "runroute/0.1";
/// Per-request geocoding timeout in seconds. A slow or unreachable geocoder
/// must never stall a generation call longer than this. Overridden by
/// `GEOCODER_TIMEOUT_SECS` (validated 1..=30).
pub const DEFAULT_GEOCODER_TIMEOUT_SECS: u64 = 4;
/// Upper bound accepted for `GEOCODER_TIMEOUT_SECS`.
pub const MAX_GEOCODER_TIMEOUT_SECS: u64 = 30;

// --- Route generation structural limits ---

/// Number of alternative routes produced per request. Overridden by
/// `ROUTE_ALTERNATIVES` (validated 1..=10).
pub const DEFAULT_ROUTE_ALTERNATIVES: u32 = 3;
/// Hard upper bound accepted for `ROUTE_ALTERNATIVES`.
pub const MAX_ROUTE_ALTERNATIVES: u32 = 10;

/// Reference coordinate used when the start address cannot be geocoded
/// (downtown New York City). Generation proceeds from here unchanged.
pub const FALLBACK_CENTER_LAT: f64 = 40.7128;
pub const FALLBACK_CENTER_LNG: f64 = -74.0060;
/// When an end address is given but fails to geocode, the substitute end
/// point is drawn uniformly within this many degrees of the fallback center.
pub const END_FALLBACK_JITTER_DEG: f64 = 0.1;

// --- Waypoint synthesis coefficients ---

/// Angular segments in a loop route. The waypoint list holds one point per
/// segment plus a closing duplicate of the first point (13 total).
pub const LOOP_SEGMENTS: usize = 12;
/// Waypoints in a point-to-point route: start, 7 interior points, end.
pub const PATH_POINTS: usize = 9;

/// Loop footprint heuristic: axis offsets are `distance_km / 15` degrees.
/// This is a known approximation, not a circumference-derived radius; the
/// apparent loop size does not scale geometrically with the target distance.
pub const LOOP_RADIUS_DIVISOR: f64 = 15.0;
/// Synthesized end points are perturbed from the start by up to
/// `distance_km / 15` degrees per axis.
pub const END_SYNTH_DIVISOR: f64 = 15.0;
/// Point-to-point oscillation amplitude is `adjusted_distance / 20` degrees.
pub const PATH_OSCILLATION_DIVISOR: f64 = 20.0;

/// A point-to-point route must be at least this factor longer than the
/// direct great-circle line between its endpoints.
pub const PATH_DETOUR_FACTOR: f64 = 1.2;

/// Reported distance jitter: the estimate is `target * U(1 - j, 1 + j)`.
pub const DISTANCE_JITTER: f64 = 0.1;

/// Decimal places for all emitted coordinates.
pub const COORDINATE_DECIMALS: u32 = 6;
/// Decimal places for the reported distance estimate.
pub const DISTANCE_DECIMALS: u32 = 1;

// --- Pace model ---
// Estimated completion time assumes a recreational running pace band of
// 6-8 minutes per kilometer.

/// Fast end of the assumed pace band (min/km).
pub const PACE_MIN_PER_KM_LOW: f64 = 6.0;
/// Slow end of the assumed pace band (min/km).
pub const PACE_MIN_PER_KM_HIGH: f64 = 8.0;
