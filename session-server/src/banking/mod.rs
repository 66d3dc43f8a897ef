//! Banking helpers
//!
//! - [`iban`] - Czech domestic account → IBAN with mod-97 check digits
//! - [`payment`] - payout account and QR payment strings for guest bills

pub mod iban;
pub mod payment;

pub use iban::{BankAccount, IbanError};
pub use payment::PayoutAccount;
