//! Seat API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/seats/{seat_id}/partner | GET | 同桌座位 |
//! | /api/sessions/{session_id}/seats | GET | 会话内所有预订 |
//! | /api/sessions/{session_id}/seats/{seat_id} | GET | 单个座位预订 |
//! | /api/sessions/{session_id}/seats/{seat_id} | POST | 预订座位 (自动预订同桌) |
//! | /api/sessions/{session_id}/seats/{seat_id}?guest_id= | DELETE | 释放座位 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/seats/{seat_id}/partner", get(handler::partner))
        .nest("/api/sessions/{session_id}/seats", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::list)).route(
        "/{seat_id}",
        get(handler::get_by_id)
            .post(handler::reserve)
            .delete(handler::release),
    )
}
