//! IBAN API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/iban | POST | 捷克国内账号转换为 IBAN |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/iban", post(handler::generate))
}
