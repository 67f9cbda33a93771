mod descriptor;
mod loop_synth;
mod path_synth;

use crate::config::RouteEngineConfig;
use crate::constants::{
    DISTANCE_DECIMALS, DISTANCE_JITTER, END_FALLBACK_JITTER_DEG, FALLBACK_CENTER_LAT,
    FALLBACK_CENTER_LNG,
};
use crate::error::{AppError, Result};
use crate::models::{Coordinates, GeneratedRoute, RouteAnchor, RouteRequest};
use crate::services::geocoder::Geocode;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::sync::Arc;

/// Route synthesis engine.
///
/// Stateless between calls: each request geocodes its addresses, synthesizes
/// `num_routes` alternatives and returns them. Geocoding loss never fails a
/// call; generation degrades to a fixed reference coordinate instead.
pub struct RouteEngine {
    geocoder: Arc<dyn Geocode>,
    config: RouteEngineConfig,
}

impl RouteEngine {
    pub fn new(geocoder: Arc<dyn Geocode>, config: RouteEngineConfig) -> Self {
        RouteEngine { geocoder, config }
    }

    /// Number of alternatives produced per request.
    pub fn num_routes(&self) -> u32 {
        self.config.num_routes
    }

    /// Generate alternatives for the request, seeding synthesis randomness
    /// from the OS.
    pub async fn generate(&self, request: &RouteRequest) -> Result<Vec<GeneratedRoute>> {
        let mut rng = StdRng::from_os_rng();
        self.generate_with_rng(request, &mut rng).await
    }

    /// Generation with an injected random source, the seam deterministic
    /// tests drive with a seeded [`StdRng`].
    pub async fn generate_with_rng<R: Rng + Send>(
        &self,
        request: &RouteRequest,
        rng: &mut R,
    ) -> Result<Vec<GeneratedRoute>> {
        // The HTTP layer validates too; re-check here so a direct caller
        // gets a descriptive failure instead of nonsensical routes.
        request.validate().map_err(AppError::InvalidRequest)?;

        tracing::info!(
            start = %request.start_address,
            distance_km = request.distance_km,
            mode = %request.mode,
            is_loop = request.is_loop,
            "Route request: '{}', {:.1}km, mode={}, loop={}",
            request.start_address,
            request.distance_km,
            request.mode,
            request.is_loop
        );

        let end_address = if request.is_loop {
            None
        } else {
            request.end_address.as_deref()
        };

        let (start_lookup, end_lookup) = match end_address {
            Some(address) => {
                futures::future::join(
                    self.geocoder.resolve(&request.start_address),
                    self.geocoder.resolve(address),
                )
                .await
            }
            None => (self.geocoder.resolve(&request.start_address).await, None),
        };

        let start = start_lookup.unwrap_or_else(|| {
            tracing::warn!(
                address = %request.start_address,
                "Start address did not geocode, using fallback center"
            );
            fallback_center()
        });

        let end = match (end_address, end_lookup) {
            (None, _) => None,
            (Some(_), Some(coordinates)) => Some(coordinates),
            (Some(address), None) => {
                tracing::warn!(
                    address = %address,
                    "End address did not geocode, substituting a point near the fallback center"
                );
                Some(jittered_fallback_end(rng))
            }
        };

        let mut routes = Vec::with_capacity(self.config.num_routes as usize);
        for index in 0..self.config.num_routes {
            let route = if request.is_loop {
                self.build_loop_route(start, request, index, rng)
            } else {
                self.build_path_route(start, end, request, index, rng)
            };
            routes.push(route);
        }

        tracing::info!(
            count = routes.len(),
            "Generated {} route alternatives",
            routes.len()
        );

        Ok(routes)
    }

    fn build_loop_route<R: Rng>(
        &self,
        center: Coordinates,
        request: &RouteRequest,
        index: u32,
        rng: &mut R,
    ) -> GeneratedRoute {
        let geometry =
            loop_synth::synthesize(center, request.distance_km, request.mode, index, rng);

        GeneratedRoute {
            id: index,
            name: descriptor::route_name(index),
            distance_km: geometry.distance_km,
            description: descriptor::description(request.mode, true, index),
            difficulty: descriptor::difficulty(request.mode, index).to_string(),
            waypoints: geometry.waypoints,
            elevation_gain_m: geometry.elevation_gain_m,
            estimated_time: descriptor::estimated_time(geometry.distance_km),
            terrain: descriptor::terrain(request.mode, index).to_string(),
            mode: request.mode,
            is_loop: true,
            anchor: RouteAnchor::Loop {
                center: geometry.center,
            },
        }
    }

    fn build_path_route<R: Rng>(
        &self,
        start: Coordinates,
        end: Option<Coordinates>,
        request: &RouteRequest,
        index: u32,
        rng: &mut R,
    ) -> GeneratedRoute {
        let geometry =
            path_synth::synthesize(start, end, request.distance_km, request.mode, rng);

        GeneratedRoute {
            id: index,
            name: descriptor::route_name(index),
            distance_km: geometry.distance_km,
            description: descriptor::description(request.mode, false, index),
            difficulty: descriptor::difficulty(request.mode, index).to_string(),
            waypoints: geometry.waypoints,
            elevation_gain_m: geometry.elevation_gain_m,
            estimated_time: descriptor::estimated_time(geometry.distance_km),
            terrain: descriptor::terrain(request.mode, index).to_string(),
            mode: request.mode,
            is_loop: false,
            anchor: RouteAnchor::PointToPoint {
                start: geometry.start,
                end: geometry.end,
            },
        }
    }
}

/// Reference coordinate used when the start address cannot be resolved.
fn fallback_center() -> Coordinates {
    Coordinates {
        lat: FALLBACK_CENTER_LAT,
        lng: FALLBACK_CENTER_LNG,
    }
}

/// Substitute end point for an unresolvable end address: a uniform random
/// coordinate within ±0.1 degrees of the fallback center.
fn jittered_fallback_end<R: Rng>(rng: &mut R) -> Coordinates {
    let center = fallback_center();
    Coordinates {
        lat: center.lat + rng.random_range(-END_FALLBACK_JITTER_DEG..=END_FALLBACK_JITTER_DEG),
        lng: center.lng + rng.random_range(-END_FALLBACK_JITTER_DEG..=END_FALLBACK_JITTER_DEG),
    }
}

/// Reported distance estimate: base ± 10%, rounded to one decimal place.
fn jittered_distance_km<R: Rng>(base_km: f64, rng: &mut R) -> f64 {
    let jittered = base_km * rng.random_range(1.0 - DISTANCE_JITTER..=1.0 + DISTANCE_JITTER);
    let factor = 10_f64.powi(DISTANCE_DECIMALS as i32);
    let rounded = (jittered * factor).round() / factor;
    // Tiny targets can round to zero; distance must stay strictly positive
    if rounded > 0.0 {
        rounded
    } else {
        jittered
    }
}
