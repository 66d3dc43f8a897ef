//! IBAN API Handlers

use axum::Json;
use shared::models::{IbanRequest, IbanResponse};

use crate::banking::{BankAccount, iban};
use crate::utils::validation::{MAX_ACCOUNT_LEN, validate_required_text};
use crate::utils::{AppError, AppResult, ErrorCode};

/// POST /api/iban - 国内账号转 IBAN
///
/// `generate` 对非法输入返回空字符串，这里转成 400 并附带原因
pub async fn generate(Json(payload): Json<IbanRequest>) -> AppResult<Json<IbanResponse>> {
    validate_required_text(&payload.account, "account", MAX_ACCOUNT_LEN)?;

    let iban = iban::generate(&payload.account);
    if iban.is_empty() {
        let reason = BankAccount::parse(&payload.account)
            .err()
            .map(|e| e.to_string())
            .unwrap_or_else(|| "malformed account".to_string());
        return Err(AppError::with_message(
            ErrorCode::InvalidBankAccount,
            format!("Invalid bank account: {reason}"),
        )
        .with_detail("account", payload.account));
    }

    Ok(Json(IbanResponse {
        account: payload.account.trim().to_string(),
        iban,
    }))
}
