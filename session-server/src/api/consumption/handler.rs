//! Consumption API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{ConsumptionCreate, ConsumptionRecord, GuestBill, GuestTotal};

use crate::billing;
use crate::core::ServerState;
use crate::db::repository::consumption;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_ID_LEN, validate_consumption, validate_required_text};

/// POST /api/sessions/:session_id/consumption - 记录消费
pub async fn create(
    State(state): State<ServerState>,
    Path(session_id): Path<String>,
    Json(payload): Json<ConsumptionCreate>,
) -> AppResult<Json<ConsumptionRecord>> {
    validate_consumption(&session_id, &payload)?;

    let record = consumption::create(&state.pool, &session_id, payload).await?;
    tracing::info!(
        session_id = %record.session_id,
        guest_id = %record.guest_id,
        item = %record.item_name,
        quantity = record.quantity,
        "Consumption recorded"
    );
    Ok(Json(record))
}

/// GET /api/sessions/:session_id/consumption - 按客人汇总
pub async fn totals(
    State(state): State<ServerState>,
    Path(session_id): Path<String>,
) -> AppResult<Json<Vec<GuestTotal>>> {
    let records = consumption::find_by_session(&state.pool, &session_id).await?;
    Ok(Json(billing::guest_totals(&records)))
}

/// GET /api/sessions/:session_id/guests/:guest_id/consumption - 客人消费明细
pub async fn list_for_guest(
    State(state): State<ServerState>,
    Path((session_id, guest_id)): Path<(String, String)>,
) -> AppResult<Json<Vec<ConsumptionRecord>>> {
    let records = consumption::find_by_guest(&state.pool, &session_id, &guest_id).await?;
    Ok(Json(records))
}

/// GET /api/sessions/:session_id/guests/:guest_id/bill - 客人账单
///
/// 未配置收款账户时账单不含 payment 字段
pub async fn bill(
    State(state): State<ServerState>,
    Path((session_id, guest_id)): Path<(String, String)>,
) -> AppResult<Json<GuestBill>> {
    validate_required_text(&session_id, "session_id", MAX_ID_LEN)?;
    validate_required_text(&guest_id, "guest_id", MAX_ID_LEN)?;

    let records = consumption::find_by_guest(&state.pool, &session_id, &guest_id).await?;
    Ok(Json(billing::build_bill(
        &session_id,
        &guest_id,
        &records,
        state.payout.as_ref(),
    )))
}
