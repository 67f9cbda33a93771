pub mod geocoder;
pub mod route_engine;
