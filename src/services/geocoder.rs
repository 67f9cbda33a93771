use crate::config::GeocoderConfig;
use crate::constants::{DEFAULT_GEOCODER_BASE_URL, DEFAULT_GEOCODER_TIMEOUT_SECS};
use crate::models::Coordinates;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Address-to-coordinate lookup.
///
/// Resolution is strictly best effort: network failures, timeouts, non-2xx
/// responses, unparseable payloads, and empty result sets all collapse to
/// `None`. Callers own the fallback decision.
#[async_trait]
pub trait Geocode: Send + Sync {
    async fn resolve(&self, address: &str) -> Option<Coordinates>;
}

#[derive(Clone)]
pub struct NominatimClient {
    client: Client,
    base_url: String,
    user_agent: String,
    timeout: Duration,
}

impl NominatimClient {
    pub fn new(user_agent: String) -> Self {
        NominatimClient {
            client: Client::new(),
            base_url: DEFAULT_GEOCODER_BASE_URL.to_string(),
            user_agent,
            timeout: Duration::from_secs(DEFAULT_GEOCODER_TIMEOUT_SECS),
        }
    }

    pub fn with_config(user_agent: String, base_url: String, timeout: Duration) -> Self {
        NominatimClient {
            client: Client::new(),
            base_url,
            user_agent,
            timeout,
        }
    }

    pub fn from_config(config: &GeocoderConfig) -> Self {
        Self::with_config(
            config.user_agent.clone(),
            config.base_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }
}

#[async_trait]
impl Geocode for NominatimClient {
    /// Single best-effort lookup against the Nominatim search API.
    /// No retries, no caching; bounded by the configured timeout.
    async fn resolve(&self, address: &str) -> Option<Coordinates> {
        let url = format!("{}/search", self.base_url);

        tracing::debug!(address = address, "Geocoding lookup: {}", address);

        let response = match self
            .client
            .get(&url)
            .query(&[("q", address), ("format", "json"), ("limit", "1")])
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .timeout(self.timeout)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(address = address, error = %e, "Geocoding request failed: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::warn!(
                address = address,
                status = %response.status(),
                "Geocoder returned HTTP {}",
                response.status()
            );
            return None;
        }

        let places: Vec<NominatimPlace> = match response.json().await {
            Ok(places) => places,
            Err(e) => {
                tracing::warn!(address = address, error = %e, "Failed to parse geocoder response: {}", e);
                return None;
            }
        };

        let place = match places.into_iter().next() {
            Some(place) => place,
            None => {
                tracing::info!(address = address, "Geocoder found no match for '{}'", address);
                return None;
            }
        };

        let lat: f64 = place.lat.parse().ok()?;
        let lng: f64 = place.lon.parse().ok()?;

        match Coordinates::new(lat, lng) {
            Ok(coordinates) => {
                tracing::debug!(
                    address = address,
                    lat = coordinates.lat,
                    lng = coordinates.lng,
                    "Geocoded '{}' to ({:.4}, {:.4})",
                    address,
                    coordinates.lat,
                    coordinates.lng
                );
                Some(coordinates)
            }
            Err(e) => {
                tracing::warn!(address = address, error = %e, "Geocoder returned invalid coordinates");
                None
            }
        }
    }
}

// Nominatim API response types. Nominatim serializes coordinates as strings.

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}
