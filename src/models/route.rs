use crate::models::Coordinates;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    #[default]
    Endurance,
    Conditioning,
}

impl RunMode {
    /// Per-mode multiplier scaling the index-dependent angular distortion
    /// of loop routes.
    pub fn loop_smoothness(&self) -> f64 {
        match self {
            RunMode::Endurance => 0.8,
            RunMode::Conditioning => 0.5,
        }
    }

    /// Oscillation frequency factor for point-to-point routes. Endurance
    /// paths run straighter; conditioning paths wind more.
    pub fn path_complexity(&self) -> f64 {
        match self {
            RunMode::Endurance => 0.3,
            RunMode::Conditioning => 0.7,
        }
    }

    /// Elevation-gain estimate range (meters) for loop routes.
    pub fn loop_elevation_range(&self) -> RangeInclusive<u32> {
        match self {
            RunMode::Endurance => 5..=30,
            RunMode::Conditioning => 30..=100,
        }
    }

    /// Elevation-gain estimate range (meters) for point-to-point routes.
    pub fn path_elevation_range(&self) -> RangeInclusive<u32> {
        match self {
            RunMode::Endurance => 10..=40,
            RunMode::Conditioning => 40..=120,
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::Endurance => write!(f, "endurance"),
            RunMode::Conditioning => write!(f, "conditioning"),
        }
    }
}

impl FromStr for RunMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "endurance" => Ok(RunMode::Endurance),
            "conditioning" => Ok(RunMode::Conditioning),
            _ => Err(format!("Invalid run mode: '{}'", s)),
        }
    }
}

/// Input bundle for one generation call. Constructed per request and
/// discarded after use.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteRequest {
    pub start_address: String,
    #[serde(default)]
    pub end_address: Option<String>,
    pub distance_km: f64,
    #[serde(default)]
    pub mode: RunMode,
    #[serde(default = "default_is_loop")]
    pub is_loop: bool,
}

fn default_is_loop() -> bool {
    true
}

impl RouteRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.start_address.trim().is_empty() {
            return Err("start_address is required".to_string());
        }
        if !self.distance_km.is_finite() || self.distance_km <= 0.0 || self.distance_km > 100.0 {
            return Err("distance_km must be between 0.1 and 100 km".to_string());
        }
        if !self.is_loop
            && self
                .end_address
                .as_deref()
                .map_or(true, |a| a.trim().is_empty())
        {
            return Err("end_address is required for point-to-point routes".to_string());
        }
        Ok(())
    }
}

/// Geographic anchor of a generated route: loops have a center, point-to-point
/// routes have distinct start and end coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RouteAnchor {
    Loop { center: Coordinates },
    PointToPoint { start: Coordinates, end: Coordinates },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedRoute {
    /// 0-based index within the generated batch; also drives the
    /// index-cycled descriptor vocabularies.
    pub id: u32,
    pub name: String,
    pub distance_km: f64,
    pub description: String,
    pub difficulty: String,
    pub waypoints: Vec<Coordinates>,
    pub elevation_gain_m: u32,
    /// Estimated completion time range, e.g. "30-40 min".
    pub estimated_time: String,
    pub terrain: String,
    pub mode: RunMode,
    pub is_loop: bool,
    #[serde(flatten)]
    pub anchor: RouteAnchor,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RoutesResponse {
    pub routes: Vec<GeneratedRoute>,
    /// Echo of the requested start address.
    pub address: String,
    /// Echo of the requested target distance.
    pub distance_km: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_loop_request() -> RouteRequest {
        RouteRequest {
            start_address: "Central Park, New York".to_string(),
            end_address: None,
            distance_km: 5.0,
            mode: RunMode::Endurance,
            is_loop: true,
        }
    }

    #[test]
    fn test_route_request_validation() {
        assert!(valid_loop_request().validate().is_ok());

        let mut req = valid_loop_request();
        req.start_address = "   ".to_string();
        assert!(req.validate().is_err());

        let mut req = valid_loop_request();
        req.distance_km = 0.0;
        assert!(req.validate().is_err());

        let mut req = valid_loop_request();
        req.distance_km = 100.5;
        assert!(req.validate().is_err());

        let mut req = valid_loop_request();
        req.distance_km = f64::NAN;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_point_to_point_requires_end_address() {
        let mut req = valid_loop_request();
        req.is_loop = false;
        assert!(req.validate().is_err());

        req.end_address = Some("Times Square, New York".to_string());
        assert!(req.validate().is_ok());

        req.end_address = Some("  ".to_string());
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_run_mode_display_and_parse() {
        assert_eq!(RunMode::Endurance.to_string(), "endurance");
        assert_eq!(RunMode::Conditioning.to_string(), "conditioning");

        assert_eq!("endurance".parse::<RunMode>().unwrap(), RunMode::Endurance);
        assert_eq!(
            "CONDITIONING".parse::<RunMode>().unwrap(),
            RunMode::Conditioning
        );
        assert!("sprint".parse::<RunMode>().is_err());
    }

    #[test]
    fn test_run_mode_constants() {
        assert!(RunMode::Endurance.loop_smoothness() > RunMode::Conditioning.loop_smoothness());
        assert!(RunMode::Endurance.path_complexity() < RunMode::Conditioning.path_complexity());
        assert_eq!(RunMode::Conditioning.loop_elevation_range(), 30..=100);
        assert_eq!(RunMode::Endurance.path_elevation_range(), 10..=40);
    }

    #[test]
    fn test_route_anchor_serialization() {
        let center = Coordinates::new(40.7128, -74.0060).unwrap();
        let anchor = RouteAnchor::Loop { center };
        let json = serde_json::to_value(&anchor).unwrap();
        assert!(json.get("center").is_some());

        let p2p = RouteAnchor::PointToPoint {
            start: center,
            end: Coordinates::new(40.7580, -73.9855).unwrap(),
        };
        let json = serde_json::to_value(&p2p).unwrap();
        assert!(json.get("start").is_some());
        assert!(json.get("end").is_some());
        assert!(json.get("center").is_none());
    }

    #[test]
    fn test_request_deserialization_defaults() {
        let req: RouteRequest = serde_json::from_str(
            r#"{"start_address": "Anywhere", "distance_km": 5.0}"#,
        )
        .unwrap();
        assert!(req.is_loop);
        assert_eq!(req.mode, RunMode::Endurance);
        assert!(req.end_address.is_none());
    }
}
