use async_trait::async_trait;
use runroute::config::RouteEngineConfig;
use runroute::models::Coordinates;
use runroute::services::geocoder::Geocode;
use runroute::services::route_engine::RouteEngine;
use runroute::AppState;
use std::collections::HashMap;
use std::sync::Arc;

/// Geocoder stub resolving addresses from a fixed table
#[allow(dead_code)]
pub struct TableGeocoder {
    places: HashMap<String, Coordinates>,
}

#[allow(dead_code)]
impl TableGeocoder {
    pub fn new() -> Self {
        TableGeocoder {
            places: HashMap::new(),
        }
    }

    pub fn with_place(mut self, address: &str, lat: f64, lng: f64) -> Self {
        self.places
            .insert(address.to_string(), Coordinates::new(lat, lng).unwrap());
        self
    }
}

#[async_trait]
impl Geocode for TableGeocoder {
    async fn resolve(&self, address: &str) -> Option<Coordinates> {
        self.places.get(address).copied()
    }
}

/// Geocoder stub simulating an unavailable lookup service
#[allow(dead_code)]
pub struct UnavailableGeocoder;

#[async_trait]
impl Geocode for UnavailableGeocoder {
    async fn resolve(&self, _address: &str) -> Option<Coordinates> {
        None
    }
}

#[allow(dead_code)]
pub fn central_park() -> Coordinates {
    Coordinates::new(40.7829, -73.9654).unwrap()
}

#[allow(dead_code)]
pub fn times_square() -> Coordinates {
    Coordinates::new(40.7580, -73.9855).unwrap()
}

/// Geocoder covering the addresses used across the tests
#[allow(dead_code)]
pub fn nyc_geocoder() -> TableGeocoder {
    TableGeocoder::new()
        .with_place("Central Park, New York", 40.7829, -73.9654)
        .with_place("Times Square, New York", 40.7580, -73.9855)
}

#[allow(dead_code)]
pub fn test_engine(geocoder: Arc<dyn Geocode>) -> RouteEngine {
    RouteEngine::new(geocoder, RouteEngineConfig::default())
}

#[allow(dead_code)]
pub fn setup_test_app(geocoder: Arc<dyn Geocode>) -> axum::Router {
    let engine = test_engine(geocoder);
    runroute::routes::create_router(Arc::new(AppState { engine }))
}

/// Live geocoder tests hit the public Nominatim API and are opt-in;
/// the default suite runs fully offline.
#[allow(dead_code)]
pub fn live_geocoder_tests_enabled() -> bool {
    std::env::var("RUN_LIVE_GEOCODER_TESTS").is_ok()
}
