//! Reservation store seam

use async_trait::async_trait;
use shared::models::{SeatReservation, SeatReservationCreate};

use crate::db::repository::RepoResult;

/// Backing store for seat reservations, keyed by `(session_id, seat_id)`.
///
/// `insert` must be a conditional write: when a row already exists for the
/// key it fails with `RepoError::Duplicate` and leaves the row untouched.
#[async_trait]
pub trait ReservationStore: Send + Sync {
    async fn find(&self, session_id: &str, seat_id: &str) -> RepoResult<Option<SeatReservation>>;

    async fn insert(&self, data: SeatReservationCreate) -> RepoResult<SeatReservation>;

    /// Delete exactly this reservation. `false` when it was already gone.
    async fn delete(&self, reservation: &SeatReservation) -> RepoResult<bool>;

    async fn list(&self, session_id: &str) -> RepoResult<Vec<SeatReservation>>;
}
