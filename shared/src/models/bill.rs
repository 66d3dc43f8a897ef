//! Guest Bill Model

use serde::{Deserialize, Serialize};

/// What a guest owes for a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestBill {
    pub session_id: String,
    pub guest_id: String,
    pub item_count: i64,
    pub total: f64,
    /// Present when the host configured a payout account and the total is positive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<PaymentInstructions>,
}

/// Bank transfer instructions for settling a bill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentInstructions {
    pub iban: String,
    pub amount: f64,
    pub currency: String,
    pub message: String,
    /// Czech QR payment string (SPAYD 1.0)
    pub spayd: String,
}

/// IBAN conversion request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IbanRequest {
    pub account: String,
}

/// IBAN conversion response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IbanResponse {
    pub account: String,
    pub iban: String,
}
