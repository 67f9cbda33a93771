use crate::error::{AppError, Result};
use crate::models::route::{RouteRequest, RoutesResponse};
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// POST /routes/generate
/// Generate running route alternatives from a start address
pub async fn generate_routes(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RouteRequest>,
) -> Result<Json<RoutesResponse>> {
    // Validate request
    request.validate().map_err(AppError::InvalidRequest)?;

    tracing::info!(
        start = %request.start_address,
        end = request.end_address.as_deref().unwrap_or("-"),
        distance_km = request.distance_km,
        mode = %request.mode,
        is_loop = request.is_loop,
        "Generate request: '{}', {:.1}km, mode={}, loop={}",
        request.start_address,
        request.distance_km,
        request.mode,
        request.is_loop
    );

    let routes = state.engine.generate(&request).await?;

    Ok(Json(RoutesResponse {
        routes,
        address: request.start_address,
        distance_km: request.distance_km,
    }))
}
