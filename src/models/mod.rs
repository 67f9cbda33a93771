pub mod coordinates;
pub mod route;

pub use coordinates::Coordinates;
pub use route::{GeneratedRoute, RouteAnchor, RouteRequest, RoutesResponse, RunMode};
