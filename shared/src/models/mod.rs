//! Data models
//!
//! Shared between session-server and frontend (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! Record IDs are `i64` row ids assigned by the store; session, guest and seat ids are the
//! caller's own string identifiers.

pub mod bill;
pub mod consumption;
pub mod seat_reservation;

// Re-exports
pub use bill::*;
pub use consumption::*;
pub use seat_reservation::*;
