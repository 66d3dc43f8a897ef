//! Unified error codes for the session server
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Permission errors
//! - 2xxx: Seat errors
//! - 3xxx: Banking errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource already exists
    AlreadyExists = 4,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Permission ====================
    /// Reservation belongs to another guest
    NotSeatOwner = 1002,

    // ==================== 2xxx: Seat ====================
    /// Seat is already taken in this session
    SeatTaken = 2001,
    /// Seat id is not `{row letters}{positive number}`
    InvalidSeatId = 2002,
    /// No reservation for the seat in this session
    ReservationNotFound = 2003,

    // ==================== 3xxx: Banking ====================
    /// Bank account could not be converted to an IBAN
    InvalidBankAccount = 3001,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this code represents success
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Success",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::RequiredField => "Required field missing",
            ErrorCode::ValueOutOfRange => "Value out of range",

            // Permission
            ErrorCode::NotSeatOwner => "Seat is reserved by another guest",

            // Seat
            ErrorCode::SeatTaken => "Seat is already taken",
            ErrorCode::InvalidSeatId => "Invalid seat id",
            ErrorCode::ReservationNotFound => "Reservation not found",

            // Banking
            ErrorCode::InvalidBankAccount => "Invalid bank account",

            // System
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            4 => Ok(ErrorCode::AlreadyExists),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Permission
            1002 => Ok(ErrorCode::NotSeatOwner),

            // Seat
            2001 => Ok(ErrorCode::SeatTaken),
            2002 => Ok(ErrorCode::InvalidSeatId),
            2003 => Ok(ErrorCode::ReservationNotFound),

            // Banking
            3001 => Ok(ErrorCode::InvalidBankAccount),

            // System
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::AlreadyExists.code(), 4);
        assert_eq!(ErrorCode::ValueOutOfRange.code(), 8);
        assert_eq!(ErrorCode::NotSeatOwner.code(), 1002);
        assert_eq!(ErrorCode::SeatTaken.code(), 2001);
        assert_eq!(ErrorCode::InvalidSeatId.code(), 2002);
        assert_eq!(ErrorCode::ReservationNotFound.code(), 2003);
        assert_eq!(ErrorCode::InvalidBankAccount.code(), 3001);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::SeatTaken.is_success());
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(2001), Ok(ErrorCode::SeatTaken));
        assert_eq!(ErrorCode::try_from(3001), Ok(ErrorCode::InvalidBankAccount));
        assert_eq!(ErrorCode::try_from(9002), Ok(ErrorCode::DatabaseError));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
        // gaps in a range are not codes
        assert_eq!(ErrorCode::try_from(1), Err(InvalidErrorCode(1)));
        assert_eq!(ErrorCode::try_from(1001), Err(InvalidErrorCode(1001)));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::SeatTaken).unwrap();
        assert_eq!(json, "2001");
    }

    #[test]
    fn test_deserialize() {
        let code: ErrorCode = serde_json::from_str("2002").unwrap();
        assert_eq!(code, ErrorCode::InvalidSeatId);
        assert!(serde_json::from_str::<ErrorCode>("77").is_err());
    }
}
