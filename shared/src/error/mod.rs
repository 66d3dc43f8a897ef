//! Unified error system
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Error body returned by failing endpoints
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Permission errors
//! - 2xxx: Seat errors
//! - 3xxx: Banking errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::with_message(ErrorCode::SeatTaken, "Seat A1 is already taken")
//!     .with_detail("seat_id", "A1");
//!
//! let response = ApiResponse::error(&err);
//! assert_eq!(response.code, 2001);
//! assert_eq!(err.http_status(), http::StatusCode::CONFLICT);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
