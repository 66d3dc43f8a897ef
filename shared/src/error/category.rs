//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// - 0xxx: General errors
/// - 1xxx: Permission errors
/// - 2xxx: Seat errors
/// - 3xxx: Banking errors
/// - 9xxx (and anything unmapped): System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Permission errors (1xxx)
    Permission,
    /// Seat errors (2xxx)
    Seat,
    /// Banking errors (3xxx)
    Banking,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Permission,
            2000..3000 => Self::Seat,
            3000..4000 => Self::Banking,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Permission => "permission",
            Self::Seat => "seat",
            Self::Banking => "banking",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Permission);
        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Seat);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Banking);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(5000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::NotSeatOwner.category(), ErrorCategory::Permission);
        assert_eq!(ErrorCode::SeatTaken.category(), ErrorCategory::Seat);
        assert_eq!(
            ErrorCode::InvalidBankAccount.category(),
            ErrorCategory::Banking
        );
        assert_eq!(ErrorCode::DatabaseError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&ErrorCategory::Seat).unwrap();
        assert_eq!(json, "\"seat\"");
        let category: ErrorCategory = serde_json::from_str("\"banking\"").unwrap();
        assert_eq!(category, ErrorCategory::Banking);
    }
}
