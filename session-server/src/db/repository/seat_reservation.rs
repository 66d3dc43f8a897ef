//! Seat Reservation Repository

use async_trait::async_trait;
use shared::models::{SeatReservation, SeatReservationCreate};
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::seating::ReservationStore;

const SELECT: &str = "SELECT id, session_id, seat_id, guest_id, guest_name, auto_reserved, created_at FROM seat_reservation";

pub async fn find_by_seat(
    pool: &SqlitePool,
    session_id: &str,
    seat_id: &str,
) -> RepoResult<Option<SeatReservation>> {
    let sql = format!("{SELECT} WHERE session_id = ? AND seat_id = ? LIMIT 1");
    let row = sqlx::query_as::<_, SeatReservation>(&sql)
        .bind(session_id)
        .bind(seat_id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_session(
    pool: &SqlitePool,
    session_id: &str,
) -> RepoResult<Vec<SeatReservation>> {
    let sql = format!("{SELECT} WHERE session_id = ? ORDER BY seat_id");
    let rows = sqlx::query_as::<_, SeatReservation>(&sql)
        .bind(session_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Insert a reservation.
///
/// The insert is conditional on the `(session_id, seat_id)` unique key: when
/// the seat is already taken nothing is written and the call fails with
/// [`RepoError::Duplicate`]. Row ids are assigned by SQLite.
pub async fn create(pool: &SqlitePool, data: SeatReservationCreate) -> RepoResult<SeatReservation> {
    let created_at = shared::util::now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO seat_reservation (session_id, seat_id, guest_id, guest_name, auto_reserved, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6) \
         ON CONFLICT (session_id, seat_id) DO NOTHING \
         RETURNING id",
    )
    .bind(&data.session_id)
    .bind(&data.seat_id)
    .bind(&data.guest_id)
    .bind(&data.guest_name)
    .bind(data.auto_reserved)
    .bind(created_at)
    .fetch_optional(pool)
    .await?;

    let Some(id) = id else {
        return Err(RepoError::Duplicate(format!(
            "seat {} in session {}",
            data.seat_id, data.session_id
        )));
    };

    Ok(SeatReservation {
        id,
        session_id: data.session_id,
        seat_id: data.seat_id,
        guest_id: data.guest_id,
        guest_name: data.guest_name,
        auto_reserved: data.auto_reserved,
        created_at,
    })
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM seat_reservation WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

/// [`ReservationStore`] backed by the SQLite pool
#[derive(Clone, Debug)]
pub struct SqliteReservationStore {
    pool: SqlitePool,
}

impl SqliteReservationStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationStore for SqliteReservationStore {
    async fn find(&self, session_id: &str, seat_id: &str) -> RepoResult<Option<SeatReservation>> {
        find_by_seat(&self.pool, session_id, seat_id).await
    }

    async fn insert(&self, data: SeatReservationCreate) -> RepoResult<SeatReservation> {
        create(&self.pool, data).await
    }

    async fn delete(&self, reservation: &SeatReservation) -> RepoResult<bool> {
        delete(&self.pool, reservation.id).await
    }

    async fn list(&self, session_id: &str) -> RepoResult<Vec<SeatReservation>> {
        find_by_session(&self.pool, session_id).await
    }
}
