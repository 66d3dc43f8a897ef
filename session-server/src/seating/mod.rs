//! Seating
//!
//! - [`seat_id`] - seat identifiers and the table partner rule
//! - [`store`] - the reservation store seam
//! - [`memory`] - DashMap store
//! - [`reservation`] - reserve / release / list with auto-pairing

pub mod memory;
pub mod reservation;
pub mod seat_id;
pub mod store;

pub use memory::MemoryReservationStore;
pub use reservation::{ReleaseRequest, ReservationError, ReservationResult, ReserveRequest};
pub use seat_id::{SeatId, SeatIdError, partner_seat};
pub use store::ReservationStore;
