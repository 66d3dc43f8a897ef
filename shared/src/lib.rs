//! Shared types for the session server
//!
//! Record types, the unified error system and small utilities used by the
//! server crate and mirrored by the frontend.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
