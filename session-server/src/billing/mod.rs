//! Guest billing
//!
//! Aggregates consumption lines per guest and attaches bank transfer
//! instructions when the host has a payout account.

pub mod money;

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use shared::models::{ConsumptionRecord, GuestBill, GuestTotal};

use crate::banking::PayoutAccount;
use money::{line_total, to_f64};

/// Totals per guest, ordered by guest id
pub fn guest_totals(records: &[ConsumptionRecord]) -> Vec<GuestTotal> {
    let mut acc: BTreeMap<&str, (i64, Decimal)> = BTreeMap::new();
    for record in records {
        let entry = acc.entry(record.guest_id.as_str()).or_default();
        entry.0 += i64::from(record.quantity);
        entry.1 += line_total(record.unit_price, record.quantity);
    }
    acc.into_iter()
        .map(|(guest_id, (item_count, total))| GuestTotal {
            guest_id: guest_id.to_string(),
            item_count,
            total: to_f64(total),
        })
        .collect()
}

/// Bill for one guest. `records` may contain other guests' lines; they are skipped.
pub fn build_bill(
    session_id: &str,
    guest_id: &str,
    records: &[ConsumptionRecord],
    payout: Option<&PayoutAccount>,
) -> GuestBill {
    let mut item_count = 0i64;
    let mut total = Decimal::ZERO;
    for record in records.iter().filter(|r| r.guest_id == guest_id) {
        item_count += i64::from(record.quantity);
        total += line_total(record.unit_price, record.quantity);
    }
    let total = to_f64(total);

    let payment = payout
        .filter(|_| total > 0.0)
        .map(|account| account.instructions(total, &format!("{session_id} {guest_id}")));

    GuestBill {
        session_id: session_id.to_string(),
        guest_id: guest_id.to_string(),
        item_count,
        total,
        payment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(guest_id: &str, unit_price: f64, quantity: i32) -> ConsumptionRecord {
        ConsumptionRecord {
            id: 0,
            session_id: "lan-42".to_string(),
            guest_id: guest_id.to_string(),
            item_name: "item".to_string(),
            unit_price,
            quantity,
            created_at: 0,
        }
    }

    #[test]
    fn totals_group_by_guest() {
        let records = vec![
            record("g2", 189.0, 1),
            record("g1", 35.0, 2),
            record("g1", 0.1, 3),
        ];
        let totals = guest_totals(&records);
        assert_eq!(
            totals,
            vec![
                GuestTotal {
                    guest_id: "g1".to_string(),
                    item_count: 5,
                    total: 70.3,
                },
                GuestTotal {
                    guest_id: "g2".to_string(),
                    item_count: 1,
                    total: 189.0,
                },
            ]
        );
    }

    #[test]
    fn bill_without_payout_has_no_payment() {
        let records = vec![record("g1", 35.0, 2), record("g2", 10.0, 1)];
        let bill = build_bill("lan-42", "g1", &records, None);
        assert_eq!(bill.total, 70.0);
        assert_eq!(bill.item_count, 2);
        assert!(bill.payment.is_none());
    }

    #[test]
    fn bill_with_payout_carries_spayd() {
        let payout = PayoutAccount::from_domestic("19-2000145399/0800", "CZK").unwrap();
        let records = vec![record("g1", 49.95, 2)];
        let bill = build_bill("lan-42", "g1", &records, Some(&payout));

        let payment = bill.payment.unwrap();
        assert_eq!(payment.amount, 99.9);
        assert_eq!(payment.iban, "CZ6508000000192000145399");
        assert_eq!(
            payment.spayd,
            "SPD*1.0*ACC:CZ6508000000192000145399*AM:99.90*CC:CZK*MSG:lan-42 g1"
        );
    }

    #[test]
    fn empty_bill_has_no_payment() {
        let payout = PayoutAccount::from_domestic("2000145399/0800", "CZK").unwrap();
        let bill = build_bill("lan-42", "nobody", &[record("g1", 10.0, 1)], Some(&payout));
        assert_eq!(bill.total, 0.0);
        assert_eq!(bill.item_count, 0);
        assert!(bill.payment.is_none());
    }
}
