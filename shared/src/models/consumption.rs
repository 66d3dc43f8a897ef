//! Consumption Model

use serde::{Deserialize, Serialize};

/// One consumed item line for a guest (snack, drink, rental fee, tip)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ConsumptionRecord {
    pub id: i64,
    pub session_id: String,
    pub guest_id: String,
    pub item_name: String,
    pub unit_price: f64,
    pub quantity: i32,
    pub created_at: i64,
}

/// Create consumption payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumptionCreate {
    pub guest_id: String,
    pub item_name: String,
    pub unit_price: f64,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

fn default_quantity() -> i32 {
    1
}

/// Aggregated consumption of one guest in a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestTotal {
    pub guest_id: String,
    /// Sum of quantities
    pub item_count: i64,
    /// Σ unit_price × quantity, rounded to 2 decimal places
    pub total: f64,
}
