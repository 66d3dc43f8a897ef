//! Seat Reservation Model

use serde::{Deserialize, Serialize};

/// Seat reservation entity
///
/// At most one row exists per `(session_id, seat_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct SeatReservation {
    pub id: i64,
    pub session_id: String,
    pub seat_id: String,
    pub guest_id: String,
    pub guest_name: String,
    /// Claimed automatically as the table partner of a manual reservation
    pub auto_reserved: bool,
    /// Unix millis
    pub created_at: i64,
}

/// Create seat reservation payload (store level)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatReservationCreate {
    pub session_id: String,
    pub seat_id: String,
    pub guest_id: String,
    pub guest_name: String,
    pub auto_reserved: bool,
}

/// Reserve seat request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReserveSeatRequest {
    pub guest_id: String,
    pub guest_name: String,
}

/// Release seat query (`?guest_id=`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseSeatQuery {
    pub guest_id: String,
}

/// Result of a successful reservation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationOutcome {
    /// The manual reservation just created
    pub reservation: SeatReservation,
    /// Partner seat claimed automatically, if it was free
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner: Option<SeatReservation>,
    /// Auto reservation of another guest that was overridden
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superseded: Option<SeatReservation>,
}

/// Result of a successful release
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseOutcome {
    pub released: SeatReservation,
    /// Same guest's auto reservation on the partner seat, released with it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_released: Option<SeatReservation>,
}
