//! In-memory reservation store

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use shared::models::{SeatReservation, SeatReservationCreate};
use std::sync::atomic::{AtomicI64, Ordering};

use super::ReservationStore;
use crate::db::repository::{RepoError, RepoResult};

type Key = (String, String);

/// DashMap-backed store, used by tests and for throwaway sessions
#[derive(Debug, Default)]
pub struct MemoryReservationStore {
    seats: DashMap<Key, SeatReservation>,
    last_id: AtomicI64,
}

impl MemoryReservationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }
}

#[async_trait]
impl ReservationStore for MemoryReservationStore {
    async fn find(&self, session_id: &str, seat_id: &str) -> RepoResult<Option<SeatReservation>> {
        let key = (session_id.to_string(), seat_id.to_string());
        Ok(self.seats.get(&key).map(|r| r.value().clone()))
    }

    async fn insert(&self, data: SeatReservationCreate) -> RepoResult<SeatReservation> {
        let key = (data.session_id.clone(), data.seat_id.clone());
        // The entry holds the shard lock, so check and insert are one step
        match self.seats.entry(key) {
            Entry::Occupied(_) => Err(RepoError::Duplicate(format!(
                "seat {} in session {} is already reserved",
                data.seat_id, data.session_id
            ))),
            Entry::Vacant(slot) => {
                let reservation = SeatReservation {
                    id: self.last_id.fetch_add(1, Ordering::Relaxed) + 1,
                    session_id: data.session_id,
                    seat_id: data.seat_id,
                    guest_id: data.guest_id,
                    guest_name: data.guest_name,
                    auto_reserved: data.auto_reserved,
                    created_at: shared::util::now_millis(),
                };
                slot.insert(reservation.clone());
                Ok(reservation)
            }
        }
    }

    async fn delete(&self, reservation: &SeatReservation) -> RepoResult<bool> {
        let key = (reservation.session_id.clone(), reservation.seat_id.clone());
        Ok(self
            .seats
            .remove_if(&key, |_, current| current == reservation)
            .is_some())
    }

    async fn list(&self, session_id: &str) -> RepoResult<Vec<SeatReservation>> {
        Ok(self
            .seats
            .iter()
            .filter(|entry| entry.key().0 == session_id)
            .map(|entry| entry.value().clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(seat_id: &str, guest_id: &str) -> SeatReservationCreate {
        SeatReservationCreate {
            session_id: "s1".to_string(),
            seat_id: seat_id.to_string(),
            guest_id: guest_id.to_string(),
            guest_name: guest_id.to_uppercase(),
            auto_reserved: false,
        }
    }

    #[tokio::test]
    async fn insert_is_conditional() {
        let store = MemoryReservationStore::new();
        store.insert(data("A1", "g1")).await.unwrap();

        let err = store.insert(data("A1", "g2")).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
        assert_eq!(store.find("s1", "A1").await.unwrap().unwrap().guest_id, "g1");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn delete_ignores_stale_reservation() {
        let store = MemoryReservationStore::new();
        let first = store.insert(data("A1", "g1")).await.unwrap();
        assert!(store.delete(&first).await.unwrap());

        let second = store.insert(data("A1", "g2")).await.unwrap();
        assert_ne!(first.id, second.id);
        // Deleting the old row must not remove the new one
        assert!(!store.delete(&first).await.unwrap());
        assert_eq!(store.find("s1", "A1").await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn list_filters_by_session() {
        let store = MemoryReservationStore::new();
        store.insert(data("A1", "g1")).await.unwrap();
        let mut other = data("A1", "g2");
        other.session_id = "s2".to_string();
        store.insert(other).await.unwrap();

        let listed = store.list("s1").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].guest_id, "g1");
        assert!(store.list("s3").await.unwrap().is_empty());
    }
}
