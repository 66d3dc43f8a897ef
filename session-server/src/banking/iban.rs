//! Czech domestic account → IBAN
//!
//! Domestic accounts are written `[prefix-]number/bankCode`. The IBAN is
//! `CZ` + two check digits + BBAN, where the BBAN is
//! `bankCode(4) + prefix(6) + number(10)`, each part zero-padded.
//!
//! ```
//! use session_server::banking::iban;
//!
//! assert_eq!(iban::generate("19-2000145399/0800"), "CZ6508000000192000145399");
//! assert_eq!(iban::generate("not-a-valid-account"), "");
//! ```

use thiserror::Error;

pub const COUNTRY_CODE: &str = "CZ";

/// `CZ` in ISO 13616 letter digits (C=12, Z=35) followed by the `00` placeholder
const COUNTRY_NUMERIC_SUFFIX: &str = "123500";

const BANK_CODE_LEN: usize = 4;
const PREFIX_LEN: usize = 6;
const NUMBER_LEN: usize = 10;
const MIN_BANK_CODE_LEN: usize = 2;

/// Why a domestic account string was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IbanError {
    #[error("missing '/' before the bank code")]
    MissingBankCode,

    #[error("more than one '/' in account")]
    MultipleSeparators,

    #[error("bank code must be 2-4 digits, got '{0}'")]
    InvalidBankCode(String),

    #[error("account prefix must be 1-6 digits, got '{0}'")]
    InvalidPrefix(String),

    #[error("account number must be 1-10 digits, got '{0}'")]
    InvalidNumber(String),
}

/// Parsed domestic account, every part already zero-padded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankAccount {
    pub prefix: String,
    pub number: String,
    pub bank_code: String,
}

impl BankAccount {
    /// Parse `[prefix-]number/bankCode`
    pub fn parse(raw: &str) -> Result<Self, IbanError> {
        let (account, bank_code) = raw.trim().split_once('/').ok_or(IbanError::MissingBankCode)?;
        if bank_code.contains('/') {
            return Err(IbanError::MultipleSeparators);
        }
        if !is_digits(bank_code, MIN_BANK_CODE_LEN, BANK_CODE_LEN) {
            return Err(IbanError::InvalidBankCode(bank_code.to_string()));
        }

        let (prefix, number) = account.split_once('-').unwrap_or(("0", account));
        if !is_digits(prefix, 1, PREFIX_LEN) {
            return Err(IbanError::InvalidPrefix(prefix.to_string()));
        }
        if !is_digits(number, 1, NUMBER_LEN) {
            return Err(IbanError::InvalidNumber(number.to_string()));
        }

        Ok(Self {
            prefix: zero_pad(prefix, PREFIX_LEN),
            number: zero_pad(number, NUMBER_LEN),
            bank_code: zero_pad(bank_code, BANK_CODE_LEN),
        })
    }

    /// 20-digit BBAN: bank code, prefix, number
    pub fn bban(&self) -> String {
        format!("{}{}{}", self.bank_code, self.prefix, self.number)
    }

    pub fn to_iban(&self) -> String {
        let bban = self.bban();
        format!("{COUNTRY_CODE}{}{bban}", check_digits(&bban))
    }
}

/// Convert a domestic account to an IBAN.
///
/// Malformed input yields an empty string; callers treat that as
/// "generation skipped". Use [`BankAccount::parse`] to learn why.
pub fn generate(account: &str) -> String {
    match BankAccount::parse(account) {
        Ok(parsed) => parsed.to_iban(),
        Err(e) => {
            tracing::debug!(account = %account, error = %e, "IBAN generation skipped");
            String::new()
        }
    }
}

/// Check digits for a Czech BBAN: `98 - (bban + "123500") mod 97`, two digits
pub fn check_digits(bban: &str) -> String {
    let remainder = mod97(bban.bytes().chain(COUNTRY_NUMERIC_SUFFIX.bytes()));
    format!("{:02}", 98 - remainder)
}

/// ISO 7064 mod-97 validation of an IBAN of any country.
///
/// Whitespace is ignored; letters map to 10..35.
pub fn is_valid_iban(iban: &str) -> bool {
    let compact: Vec<u8> = iban.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    if compact.len() < 5 {
        return false;
    }
    let (head, tail) = compact.split_at(4);
    if !head[..2].iter().all(u8::is_ascii_alphabetic) || !head[2..].iter().all(u8::is_ascii_digit) {
        return false;
    }

    let mut digits = Vec::with_capacity(compact.len() * 2);
    for &b in tail.iter().chain(head) {
        match b {
            b'0'..=b'9' => digits.push(b),
            b'A'..=b'Z' | b'a'..=b'z' => {
                let value = b.to_ascii_uppercase() - b'A' + 10;
                digits.push(b'0' + value / 10);
                digits.push(b'0' + value % 10);
            }
            _ => return false,
        }
    }
    mod97(digits.into_iter()) == 1
}

/// Remainder of a decimal digit string mod 97, one digit at a time
fn mod97(digits: impl Iterator<Item = u8>) -> u32 {
    digits.fold(0, |remainder, b| (remainder * 10 + u32::from(b - b'0')) % 97)
}

fn is_digits(value: &str, min_len: usize, max_len: usize) -> bool {
    (min_len..=max_len).contains(&value.len()) && value.bytes().all(|b| b.is_ascii_digit())
}

fn zero_pad(value: &str, width: usize) -> String {
    format!("{value:0>width$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_known_iban() {
        assert_eq!(generate("19-2000145399/0800"), "CZ6508000000192000145399");
    }

    #[test]
    fn output_is_country_check_digits_and_twenty_digit_bban() {
        let iban = generate("19-2000145399/0800");
        assert!(iban.starts_with("CZ"));
        let rest = &iban[2..];
        assert_eq!(rest.len(), 22);
        assert!(rest.bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn embedded_check_digits_match_bban() {
        for account in [
            "19-2000145399/0800",
            "2000145399/0800",
            "123456-1234567890/5500",
            "1/0100",
            "670100-2213489163/6210",
            "43-1234/30",
        ] {
            let iban = generate(account);
            assert!(!iban.is_empty(), "{account} should convert");
            let (digits, bban) = iban[2..].split_at(2);
            assert_eq!(check_digits(bban), digits, "{account}");
            assert!(is_valid_iban(&iban), "{iban} should validate");
        }
    }

    #[test]
    fn missing_prefix_defaults_to_zero() {
        let account = BankAccount::parse("2000145399/0800").unwrap();
        assert_eq!(account.prefix, "000000");
        assert_eq!(account.bban(), "08000000002000145399");
    }

    #[test]
    fn short_bank_code_is_padded() {
        let account = BankAccount::parse("43-1234/30").unwrap();
        assert_eq!(account.bank_code, "0030");
        assert_eq!(account.prefix, "000043");
        assert_eq!(account.number, "0000001234");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(generate("  19-2000145399/0800\n"), "CZ6508000000192000145399");
    }

    #[test]
    fn malformed_accounts_yield_empty_string() {
        for account in [
            "not-a-valid-account",
            "",
            "2000145399",
            "2000145399/0800/1",
            "2000145399/8",
            "2000145399/08000",
            "20001A5399/0800",
            "/0800",
            "-2000145399/0800",
            "19-/0800",
            "1234567-2000145399/0800",
            "12345678901/0800",
            "1-2-3/0800",
        ] {
            assert_eq!(generate(account), "", "{account:?} should be rejected");
        }
    }

    #[test]
    fn parse_reports_reason() {
        assert_eq!(
            BankAccount::parse("2000145399"),
            Err(IbanError::MissingBankCode)
        );
        assert_eq!(
            BankAccount::parse("1/2/0800"),
            Err(IbanError::MultipleSeparators)
        );
        assert_eq!(
            BankAccount::parse("1/8"),
            Err(IbanError::InvalidBankCode("8".into()))
        );
        assert_eq!(
            BankAccount::parse("x-1/0800"),
            Err(IbanError::InvalidPrefix("x".into()))
        );
        assert_eq!(
            BankAccount::parse("1-2-3/0800"),
            Err(IbanError::InvalidNumber("2-3".into()))
        );
    }

    #[test]
    fn validates_foreign_and_spaced_ibans() {
        assert!(is_valid_iban("GB82 WEST 1234 5698 7654 32"));
        assert!(is_valid_iban("CZ65 0800 0000 1920 0014 5399"));
        assert!(!is_valid_iban("CZ66 0800 0000 1920 0014 5399"));
        assert!(!is_valid_iban("CZ"));
        assert!(!is_valid_iban("1265080000001920001453"));
    }
}
