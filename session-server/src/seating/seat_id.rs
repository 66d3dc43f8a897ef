//! Seat identifiers and table partners
//!
//! A seat id is `{row letters}{positive number}`, e.g. `A3`. Two consecutive
//! numbers in the same row share a table: `(1,2)`, `(3,4)`, `(5,6)`, ...
//! Row letters are case-insensitive and stored upper-case.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatIdError {
    #[error("seat id is empty")]
    Empty,

    #[error("seat id '{0}' has no row letters")]
    MissingRow(String),

    #[error("seat id '{0}' has no seat number")]
    MissingNumber(String),

    #[error("seat number in '{0}' must be a positive integer")]
    InvalidNumber(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeatId {
    row: String,
    number: u32,
}

impl SeatId {
    pub fn row(&self) -> &str {
        &self.row
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    /// The other seat at the same table: odd → +1, even → -1
    pub fn partner(&self) -> SeatId {
        let number = if self.number % 2 == 1 {
            self.number + 1
        } else {
            self.number - 1
        };
        SeatId {
            row: self.row.clone(),
            number,
        }
    }
}

impl FromStr for SeatId {
    type Err = SeatIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SeatIdError::Empty);
        }

        let split = s
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(s.len());
        let (row, digits) = s.split_at(split);
        if row.is_empty() {
            return Err(SeatIdError::MissingRow(s.to_string()));
        }
        if digits.is_empty() {
            return Err(SeatIdError::MissingNumber(s.to_string()));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SeatIdError::InvalidNumber(s.to_string()));
        }

        let number: u32 = digits
            .parse()
            .map_err(|_| SeatIdError::InvalidNumber(s.to_string()))?;
        // u32::MAX is odd and its partner would not fit
        if number == 0 || number == u32::MAX {
            return Err(SeatIdError::InvalidNumber(s.to_string()));
        }

        Ok(Self {
            row: row.to_ascii_uppercase(),
            number,
        })
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.number)
    }
}

impl Ord for SeatId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.row
            .cmp(&other.row)
            .then(self.number.cmp(&other.number))
    }
}

impl PartialOrd for SeatId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Partner of a seat given as a string
pub fn partner_seat(seat_id: &str) -> Result<String, SeatIdError> {
    Ok(seat_id.parse::<SeatId>()?.partner().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partner_of_table_seats() {
        assert_eq!(partner_seat("A1").unwrap(), "A2");
        assert_eq!(partner_seat("A2").unwrap(), "A1");
        assert_eq!(partner_seat("B7").unwrap(), "B8");
        assert_eq!(partner_seat("C4").unwrap(), "C3");
    }

    #[test]
    fn partner_is_an_involution() {
        for raw in ["A1", "A2", "D5", "D6", "AB13", "Z100"] {
            let seat: SeatId = raw.parse().unwrap();
            assert_eq!(seat.partner().partner(), seat);
            assert_ne!(seat.partner(), seat);
            assert_eq!(seat.partner().row(), seat.row());
        }
    }

    #[test]
    fn parses_multi_letter_rows_and_large_numbers() {
        let seat: SeatId = "AB12".parse().unwrap();
        assert_eq!(seat.row(), "AB");
        assert_eq!(seat.number(), 12);
        assert_eq!(partner_seat("AB12").unwrap(), "AB11");
        assert_eq!(partner_seat("A99").unwrap(), "A100");
    }

    #[test]
    fn leading_zeros_are_normalized() {
        let seat: SeatId = "A03".parse().unwrap();
        assert_eq!(seat.to_string(), "A3");
    }

    #[test]
    fn row_letters_are_upper_cased() {
        let lower: SeatId = "ab7".parse().unwrap();
        assert_eq!(lower.row(), "AB");
        assert_eq!(lower, "AB7".parse().unwrap());
        assert_eq!(partner_seat("c4").unwrap(), "C3");
    }

    #[test]
    fn rejects_malformed_ids() {
        assert_eq!("".parse::<SeatId>(), Err(SeatIdError::Empty));
        assert_eq!(
            "12".parse::<SeatId>(),
            Err(SeatIdError::MissingRow("12".into()))
        );
        assert_eq!(
            "A".parse::<SeatId>(),
            Err(SeatIdError::MissingNumber("A".into()))
        );
        assert_eq!(
            "A0".parse::<SeatId>(),
            Err(SeatIdError::InvalidNumber("A0".into()))
        );
        assert_eq!(
            "A1B".parse::<SeatId>(),
            Err(SeatIdError::InvalidNumber("A1B".into()))
        );
        assert_eq!(
            "A-1".parse::<SeatId>(),
            Err(SeatIdError::InvalidNumber("A-1".into()))
        );
        assert!("A4294967295".parse::<SeatId>().is_err());
        assert!("A99999999999".parse::<SeatId>().is_err());
    }

    #[test]
    fn orders_by_row_then_number() {
        let mut seats: Vec<SeatId> = ["B1", "A10", "A2", "A1"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        seats.sort();
        let ordered: Vec<String> = seats.iter().map(ToString::to_string).collect();
        assert_eq!(ordered, ["A1", "A2", "A10", "B1"]);
    }
}
