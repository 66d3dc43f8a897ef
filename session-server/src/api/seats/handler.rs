//! Seat API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Serialize;
use shared::models::{
    ReleaseOutcome, ReleaseSeatQuery, ReservationOutcome, ReserveSeatRequest, SeatReservation,
};

use crate::core::ServerState;
use crate::seating::{self, ReleaseRequest, ReservationError, ReserveRequest, SeatId};
use crate::utils::validation::{
    MAX_ID_LEN, validate_required_text, validate_reserve_request, validate_seat_path,
};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Serialize)]
pub struct PartnerResponse {
    pub seat_id: String,
    pub partner: String,
}

/// GET /api/seats/:seat_id/partner - 同桌座位
pub async fn partner(Path(seat_id): Path<String>) -> AppResult<Json<PartnerResponse>> {
    validate_required_text(&seat_id, "seat_id", MAX_ID_LEN)?;
    let seat: SeatId = seat_id.parse().map_err(ReservationError::from)?;
    Ok(Json(PartnerResponse {
        partner: seat.partner().to_string(),
        seat_id: seat.to_string(),
    }))
}

/// GET /api/sessions/:session_id/seats - 会话内所有预订 (按排、号排序)
pub async fn list(
    State(state): State<ServerState>,
    Path(session_id): Path<String>,
) -> AppResult<Json<Vec<SeatReservation>>> {
    validate_required_text(&session_id, "session_id", MAX_ID_LEN)?;
    let reservations = seating::reservation::list(state.seats.as_ref(), &session_id).await?;
    Ok(Json(reservations))
}

/// GET /api/sessions/:session_id/seats/:seat_id - 单个座位预订
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path((session_id, seat_id)): Path<(String, String)>,
) -> AppResult<Json<SeatReservation>> {
    validate_seat_path(&session_id, &seat_id)?;
    let seat: SeatId = seat_id.parse().map_err(ReservationError::from)?;
    let reservation = state
        .seats
        .find(&session_id, &seat.to_string())
        .await?
        .ok_or_else(|| {
            AppError::from(ReservationError::NotFound {
                session_id: session_id.clone(),
                seat_id: seat.to_string(),
            })
        })?;
    Ok(Json(reservation))
}

/// POST /api/sessions/:session_id/seats/:seat_id - 预订座位
///
/// 同桌座位空闲时自动为同一客人预订
pub async fn reserve(
    State(state): State<ServerState>,
    Path((session_id, seat_id)): Path<(String, String)>,
    Json(payload): Json<ReserveSeatRequest>,
) -> AppResult<Json<ReservationOutcome>> {
    validate_reserve_request(&session_id, &seat_id, &payload)?;

    let outcome = seating::reservation::reserve(
        state.seats.as_ref(),
        ReserveRequest {
            session_id: &session_id,
            seat_id: &seat_id,
            guest_id: payload.guest_id.trim(),
            guest_name: payload.guest_name.trim(),
        },
    )
    .await?;
    Ok(Json(outcome))
}

/// DELETE /api/sessions/:session_id/seats/:seat_id?guest_id= - 释放座位
pub async fn release(
    State(state): State<ServerState>,
    Path((session_id, seat_id)): Path<(String, String)>,
    Query(query): Query<ReleaseSeatQuery>,
) -> AppResult<Json<ReleaseOutcome>> {
    validate_seat_path(&session_id, &seat_id)?;
    validate_required_text(&query.guest_id, "guest_id", MAX_ID_LEN)?;

    let outcome = seating::reservation::release(
        state.seats.as_ref(),
        ReleaseRequest {
            session_id: &session_id,
            seat_id: &seat_id,
            guest_id: query.guest_id.trim(),
        },
    )
    .await?;
    Ok(Json(outcome))
}
