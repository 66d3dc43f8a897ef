//! Consumption API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/sessions/{session_id}/consumption | POST | 记录消费 |
//! | /api/sessions/{session_id}/consumption | GET | 按客人汇总 |
//! | /api/sessions/{session_id}/guests/{guest_id}/consumption | GET | 客人消费明细 |
//! | /api/sessions/{session_id}/guests/{guest_id}/bill | GET | 客人账单 (含付款信息) |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/sessions/{session_id}", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/consumption", get(handler::totals).post(handler::create))
        .route("/guests/{guest_id}/consumption", get(handler::list_for_guest))
        .route("/guests/{guest_id}/bill", get(handler::bill))
}
