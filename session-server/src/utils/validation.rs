//! Input validation helpers
//!
//! Centralized length/range constants and validation functions.
//! SQLite TEXT has no built-in length enforcement, so handlers check here.

use shared::models::{ConsumptionCreate, ReserveSeatRequest};

use crate::utils::{AppError, ErrorCode};

// ── Limits ──────────────────────────────────────────────────────────

/// Guest names, item names
pub const MAX_NAME_LEN: usize = 200;

/// Session ids, guest ids, seat ids
pub const MAX_ID_LEN: usize = 128;

/// Domestic account strings (`prefix-number/bank` is at most 22 chars)
pub const MAX_ACCOUNT_LEN: usize = 64;

/// Maximum allowed unit price per item
pub const MAX_PRICE: f64 = 1_000_000.0;

/// Maximum allowed quantity per line
pub const MAX_QUANTITY: i32 = 9999;

// ── Helpers ─────────────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(
            AppError::with_message(ErrorCode::RequiredField, format!("{field} must not be empty"))
                .with_detail("field", field),
        );
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate the `{session_id}/seats/{seat_id}` path segments.
pub fn validate_seat_path(session_id: &str, seat_id: &str) -> Result<(), AppError> {
    validate_required_text(session_id, "session_id", MAX_ID_LEN)?;
    validate_required_text(seat_id, "seat_id", MAX_ID_LEN)?;
    Ok(())
}

pub fn validate_reserve_request(
    session_id: &str,
    seat_id: &str,
    req: &ReserveSeatRequest,
) -> Result<(), AppError> {
    validate_seat_path(session_id, seat_id)?;
    validate_required_text(&req.guest_id, "guest_id", MAX_ID_LEN)?;
    validate_required_text(&req.guest_name, "guest_name", MAX_NAME_LEN)?;
    Ok(())
}

pub fn validate_consumption(session_id: &str, item: &ConsumptionCreate) -> Result<(), AppError> {
    validate_required_text(session_id, "session_id", MAX_ID_LEN)?;
    validate_required_text(&item.guest_id, "guest_id", MAX_ID_LEN)?;
    validate_required_text(&item.item_name, "item_name", MAX_NAME_LEN)?;

    if !item.unit_price.is_finite() || item.unit_price < 0.0 || item.unit_price > MAX_PRICE {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("unit_price must be between 0 and {MAX_PRICE}, got {}", item.unit_price),
        )
        .with_detail("field", "unit_price"));
    }
    if item.quantity <= 0 || item.quantity > MAX_QUANTITY {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("quantity must be between 1 and {MAX_QUANTITY}, got {}", item.quantity),
        )
        .with_detail("field", "quantity"));
    }
    Ok(())
}
