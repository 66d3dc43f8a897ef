//! Payment instructions (Czech QR Platba / SPAYD 1.0)

use shared::models::PaymentInstructions;

use super::iban;

/// SPAYD limits the MSG field to 60 characters
const MAX_MESSAGE_LEN: usize = 60;

/// The host's payout account, resolved to an IBAN once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayoutAccount {
    pub iban: String,
    pub currency: String,
}

impl PayoutAccount {
    /// Resolve a domestic account; `None` when it does not convert
    pub fn from_domestic(account: &str, currency: &str) -> Option<Self> {
        let iban = iban::generate(account);
        if iban.is_empty() {
            tracing::warn!(
                account = %account,
                "Payout account is not a valid Czech account, payment instructions disabled"
            );
            return None;
        }
        Some(Self {
            iban,
            currency: currency.trim().to_ascii_uppercase(),
        })
    }

    /// Transfer instructions for `amount` with a free-text message
    pub fn instructions(&self, amount: f64, message: &str) -> PaymentInstructions {
        let message = sanitize_message(message);
        PaymentInstructions {
            spayd: spayd(&self.iban, amount, &self.currency, &message),
            iban: self.iban.clone(),
            amount,
            currency: self.currency.clone(),
            message,
        }
    }
}

/// `SPD*1.0*ACC:{iban}*AM:{amount}*CC:{currency}*MSG:{message}`
pub fn spayd(iban: &str, amount: f64, currency: &str, message: &str) -> String {
    let mut out = format!("SPD*1.0*ACC:{iban}*AM:{amount:.2}*CC:{currency}");
    if !message.is_empty() {
        out.push_str("*MSG:");
        out.push_str(message);
    }
    out
}

/// `*` separates SPAYD fields and cannot appear inside a value
fn sanitize_message(message: &str) -> String {
    message
        .chars()
        .map(|c| if c == '*' { ' ' } else { c })
        .take(MAX_MESSAGE_LEN)
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_spayd_string() {
        assert_eq!(
            spayd("CZ6508000000192000145399", 125.5, "CZK", "lan-42 guest-7"),
            "SPD*1.0*ACC:CZ6508000000192000145399*AM:125.50*CC:CZK*MSG:lan-42 guest-7"
        );
    }

    #[test]
    fn omits_empty_message() {
        assert_eq!(
            spayd("CZ6508000000192000145399", 10.0, "CZK", ""),
            "SPD*1.0*ACC:CZ6508000000192000145399*AM:10.00*CC:CZK"
        );
    }

    #[test]
    fn payout_account_resolves_iban() {
        let payout = PayoutAccount::from_domestic("19-2000145399/0800", "czk").unwrap();
        assert_eq!(payout.iban, "CZ6508000000192000145399");
        assert_eq!(payout.currency, "CZK");
    }

    #[test]
    fn malformed_payout_account_disables_payments() {
        assert!(PayoutAccount::from_domestic("2000145399", "CZK").is_none());
    }

    #[test]
    fn instructions_strip_field_separators() {
        let payout = PayoutAccount::from_domestic("2000145399/0800", "CZK").unwrap();
        let instructions = payout.instructions(42.0, "pizza*2");
        assert_eq!(instructions.message, "pizza 2");
        assert!(instructions.spayd.ends_with("*MSG:pizza 2"));
        assert_eq!(instructions.amount, 42.0);
    }

    #[test]
    fn long_messages_are_truncated() {
        let payout = PayoutAccount::from_domestic("2000145399/0800", "CZK").unwrap();
        let instructions = payout.instructions(1.0, &"x".repeat(100));
        assert_eq!(instructions.message.len(), MAX_MESSAGE_LEN);
    }
}
