use crate::constants::*;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub geocoder: GeocoderConfig,
    pub engine: RouteEngineConfig,
}

#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    /// Base URL of the Nominatim-compatible search endpoint.
    pub base_url: String,

    /// User-Agent header sent with every lookup. Nominatim's usage policy
    /// rejects requests without an identifying agent.
    pub user_agent: String,

    /// Per-request timeout in seconds. A generation call blocks on the
    /// geocoder at most this long per address.
    pub timeout_secs: u64,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GEOCODER_BASE_URL.to_string(),
            user_agent: DEFAULT_GEOCODER_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_GEOCODER_TIMEOUT_SECS,
        }
    }
}

impl GeocoderConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let timeout_secs: u64 = env::var("GEOCODER_TIMEOUT_SECS")
            .unwrap_or_else(|_| defaults.timeout_secs.to_string())
            .parse()
            .map_err(|_| "Invalid GEOCODER_TIMEOUT_SECS")?;

        if timeout_secs == 0 || timeout_secs > MAX_GEOCODER_TIMEOUT_SECS {
            return Err(format!(
                "GEOCODER_TIMEOUT_SECS must be between 1 and {} seconds",
                MAX_GEOCODER_TIMEOUT_SECS
            ));
        }

        Ok(Self {
            base_url: env::var("GEOCODER_BASE_URL").unwrap_or(defaults.base_url),
            user_agent: env::var("GEOCODER_USER_AGENT").unwrap_or(defaults.user_agent),
            timeout_secs,
        })
    }
}

#[derive(Debug, Clone)]
pub struct RouteEngineConfig {
    /// Number of alternative routes generated per request.
    pub num_routes: u32,
}

impl Default for RouteEngineConfig {
    fn default() -> Self {
        Self {
            num_routes: DEFAULT_ROUTE_ALTERNATIVES,
        }
    }
}

impl RouteEngineConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let num_routes: u32 = env::var("ROUTE_ALTERNATIVES")
            .unwrap_or_else(|_| defaults.num_routes.to_string())
            .parse()
            .map_err(|_| "Invalid ROUTE_ALTERNATIVES")?;

        if num_routes == 0 || num_routes > MAX_ROUTE_ALTERNATIVES {
            return Err(format!(
                "ROUTE_ALTERNATIVES must be between 1 and {}",
                MAX_ROUTE_ALTERNATIVES
            ));
        }

        Ok(Self { num_routes })
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            geocoder: GeocoderConfig::from_env()?,
            engine: RouteEngineConfig::from_env()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
