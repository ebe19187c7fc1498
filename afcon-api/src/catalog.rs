use afcon_core::seating::{self, SectionInfo};
use afcon_shared::{Hotel, HotelBooking, Match, Room};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/matches", get(list_matches))
        .route("/v1/matches/{id}", get(get_match))
        .route("/v1/hotels", get(list_hotels))
        .route("/v1/hotels/{id}/rooms", get(list_rooms))
        .route("/v1/bookings", get(list_bookings))
        .route("/v1/seat-map", get(seat_map))
}

/// GET /v1/matches
async fn list_matches(State(state): State<AppState>) -> Result<Json<Vec<Match>>, AppError> {
    let matches = state.catalog.list_matches().await?;
    tracing::debug!("Fetched {} matches", matches.len());
    Ok(Json(matches))
}

/// GET /v1/matches/:id
async fn get_match(
    State(state): State<AppState>,
    Path(match_id): Path<u64>,
) -> Result<Json<Match>, AppError> {
    Ok(Json(state.catalog.get_match(match_id).await?))
}

/// GET /v1/hotels
async fn list_hotels(State(state): State<AppState>) -> Result<Json<Vec<Hotel>>, AppError> {
    Ok(Json(state.catalog.list_hotels().await?))
}

/// GET /v1/hotels/:id/rooms
async fn list_rooms(
    State(state): State<AppState>,
    Path(hotel_id): Path<u64>,
) -> Result<Json<Vec<Room>>, AppError> {
    Ok(Json(state.catalog.list_rooms(hotel_id).await?))
}

/// GET /v1/bookings
async fn list_bookings(
    State(state): State<AppState>,
) -> Result<Json<Vec<HotelBooking>>, AppError> {
    Ok(Json(state.catalog.list_bookings().await?))
}

/// GET /v1/seat-map
/// Sections of the stadium with their row ranges and per-seat prices
async fn seat_map() -> Json<Vec<SectionInfo>> {
    Json(seating::seat_map())
}
