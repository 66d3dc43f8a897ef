//! Seat reservation protocol
//!
//! Reserving a seat claims it manually and, when free, its table partner as
//! an auto reservation for the same guest. Another guest may take over an
//! auto-reserved seat; manual reservations are never overridden.

use shared::error::{AppError, ErrorCode};
use shared::models::{ReleaseOutcome, ReservationOutcome, SeatReservation, SeatReservationCreate};
use thiserror::Error;

use super::{ReservationStore, SeatId, SeatIdError};
use crate::db::repository::RepoError;

#[derive(Debug, Error)]
pub enum ReservationError {
    #[error(transparent)]
    InvalidSeat(#[from] SeatIdError),

    #[error("Seat {seat_id} is already taken in session {session_id}")]
    Conflict { session_id: String, seat_id: String },

    #[error("Seat {seat_id} is not reserved in session {session_id}")]
    NotFound { session_id: String, seat_id: String },

    #[error("Seat {seat_id} is reserved by another guest")]
    NotOwner { seat_id: String },

    #[error(transparent)]
    Store(#[from] RepoError),
}

impl From<ReservationError> for AppError {
    fn from(err: ReservationError) -> Self {
        let message = err.to_string();
        match err {
            ReservationError::InvalidSeat(_) => AppError::with_message(ErrorCode::InvalidSeatId, message),
            ReservationError::Conflict { session_id, seat_id } => {
                AppError::with_message(ErrorCode::SeatTaken, message)
                    .with_detail("seat_id", seat_id)
                    .with_detail("session_id", session_id)
            }
            ReservationError::NotFound { session_id, seat_id } => {
                AppError::with_message(ErrorCode::ReservationNotFound, message)
                    .with_detail("seat_id", seat_id)
                    .with_detail("session_id", session_id)
            }
            ReservationError::NotOwner { seat_id } => {
                AppError::with_message(ErrorCode::NotSeatOwner, message).with_detail("seat_id", seat_id)
            }
            ReservationError::Store(e) => e.into(),
        }
    }
}

pub type ReservationResult<T> = Result<T, ReservationError>;

#[derive(Debug, Clone, Copy)]
pub struct ReserveRequest<'a> {
    pub session_id: &'a str,
    pub seat_id: &'a str,
    pub guest_id: &'a str,
    pub guest_name: &'a str,
}

#[derive(Debug, Clone, Copy)]
pub struct ReleaseRequest<'a> {
    pub session_id: &'a str,
    pub seat_id: &'a str,
    pub guest_id: &'a str,
}

/// Reserve a seat for a guest.
///
/// 1. An existing auto reservation held by another guest is deleted and
///    reported as `superseded`. Any other existing reservation is a conflict.
/// 2. The seat is inserted as a manual reservation.
/// 3. The partner seat is inserted as an auto reservation if it is free.
///
/// Every insert is conditional, so two concurrent requests for the same seat
/// cannot both succeed. Losing the race for the partner seat is not an error.
pub async fn reserve<S>(store: &S, req: ReserveRequest<'_>) -> ReservationResult<ReservationOutcome>
where
    S: ReservationStore + ?Sized,
{
    let seat: SeatId = req.seat_id.parse()?;
    let seat_id = seat.to_string();
    let conflict = || ReservationError::Conflict {
        session_id: req.session_id.to_string(),
        seat_id: seat_id.clone(),
    };

    let mut superseded = None;
    if let Some(existing) = store.find(req.session_id, &seat_id).await? {
        if !existing.auto_reserved || existing.guest_id == req.guest_id {
            return Err(conflict());
        }
        store.delete(&existing).await?;
        tracing::info!(
            session_id = %req.session_id,
            seat_id = %seat_id,
            previous_guest = %existing.guest_id,
            guest_id = %req.guest_id,
            "Auto reservation overridden"
        );
        superseded = Some(existing);
    }

    let reservation = match store
        .insert(SeatReservationCreate {
            session_id: req.session_id.to_string(),
            seat_id: seat_id.clone(),
            guest_id: req.guest_id.to_string(),
            guest_name: req.guest_name.to_string(),
            auto_reserved: false,
        })
        .await
    {
        Ok(r) => r,
        Err(RepoError::Duplicate(_)) => return Err(conflict()),
        Err(e) => return Err(e.into()),
    };

    let partner = reserve_partner(store, &seat, &reservation).await;

    tracing::info!(
        session_id = %req.session_id,
        seat_id = %seat_id,
        guest_id = %req.guest_id,
        partner = ?partner.as_ref().map(|p| p.seat_id.as_str()),
        "Seat reserved"
    );

    Ok(ReservationOutcome {
        reservation,
        partner,
        superseded,
    })
}

/// Claim the partner seat for the same guest. Never fails the reservation.
async fn reserve_partner<S>(store: &S, seat: &SeatId, owner: &SeatReservation) -> Option<SeatReservation>
where
    S: ReservationStore + ?Sized,
{
    let partner_id = seat.partner().to_string();
    let result = store
        .insert(SeatReservationCreate {
            session_id: owner.session_id.clone(),
            seat_id: partner_id.clone(),
            guest_id: owner.guest_id.clone(),
            guest_name: owner.guest_name.clone(),
            auto_reserved: true,
        })
        .await;

    match result {
        Ok(r) => Some(r),
        Err(RepoError::Duplicate(_)) => {
            tracing::debug!(seat_id = %partner_id, "Partner seat already reserved");
            None
        }
        Err(e) => {
            tracing::warn!(seat_id = %partner_id, error = %e, "Failed to auto-reserve partner seat");
            None
        }
    }
}

/// Release a guest's reservation.
///
/// Releasing a manual reservation also releases the partner seat when it is
/// still auto-reserved by the same guest.
pub async fn release<S>(store: &S, req: ReleaseRequest<'_>) -> ReservationResult<ReleaseOutcome>
where
    S: ReservationStore + ?Sized,
{
    let seat: SeatId = req.seat_id.parse()?;
    let seat_id = seat.to_string();

    let existing = store
        .find(req.session_id, &seat_id)
        .await?
        .ok_or_else(|| ReservationError::NotFound {
            session_id: req.session_id.to_string(),
            seat_id: seat_id.clone(),
        })?;
    if existing.guest_id != req.guest_id {
        return Err(ReservationError::NotOwner { seat_id });
    }
    if !store.delete(&existing).await? {
        return Err(ReservationError::NotFound {
            session_id: req.session_id.to_string(),
            seat_id,
        });
    }

    let mut partner_released = None;
    if !existing.auto_reserved {
        let partner_id = seat.partner().to_string();
        if let Some(partner) = store.find(req.session_id, &partner_id).await?
            && partner.auto_reserved
            && partner.guest_id == req.guest_id
            && store.delete(&partner).await?
        {
            partner_released = Some(partner);
        }
    }

    tracing::info!(
        session_id = %req.session_id,
        seat_id = %existing.seat_id,
        guest_id = %req.guest_id,
        partner_released = partner_released.is_some(),
        "Seat released"
    );

    Ok(ReleaseOutcome {
        released: existing,
        partner_released,
    })
}

/// All reservations in a session, ordered by row then seat number
pub async fn list<S>(store: &S, session_id: &str) -> ReservationResult<Vec<SeatReservation>>
where
    S: ReservationStore + ?Sized,
{
    let mut reservations = store.list(session_id).await?;
    reservations.sort_by_cached_key(|r| r.seat_id.parse::<SeatId>().ok());
    Ok(reservations)
}
