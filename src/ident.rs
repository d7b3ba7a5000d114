use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

use crate::consts::{
    CAR_ID_PREFIX_DIGITS, CAR_ID_SEPARATOR, CAR_ID_SERIAL_MAX, CAR_ID_SERIAL_MIN, CHECK_DIGIT_MODULUS,
    CHECK_DIGIT_WEIGHTS, FREQUENT_PARKER_NUMBER_LEN,
};
use crate::{ParseError, prelude::*};

/// A car identity such as `59C-12345`: two digits, one series letter, a
/// separator and a four or five digit serial. Stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CarId(String);

impl CarId {
    /// Creates a car identity, trimming and uppercasing the input first.
    ///
    /// # Errors
    /// Returns `ParseError::EmptyInput` for blank input and
    /// `ParseError::InvalidCarId` when the format does not match.
    pub fn new(raw: &str) -> Result<Self, ParseError> {
        let normalized = raw.trim().to_ascii_uppercase();
        if normalized.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        if !is_valid_car_id(&normalized) {
            return Err(ParseError::InvalidCarId(normalized));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_car_id(s: &str) -> bool {
    let Some((head, serial)) = s.split_once(CAR_ID_SEPARATOR) else {
        return false;
    };
    if !head.is_ascii() || head.len() != CAR_ID_PREFIX_DIGITS + 1 {
        return false;
    }
    let (prefix, series) = head.split_at(CAR_ID_PREFIX_DIGITS);

    prefix.bytes().all(|b| b.is_ascii_digit())
        && series.bytes().all(|b| b.is_ascii_uppercase())
        && (CAR_ID_SERIAL_MIN..=CAR_ID_SERIAL_MAX).contains(&serial.len())
        && serial.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for CarId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CarId {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CarId> for String {
    fn from(id: CarId) -> Self {
        id.0
    }
}

/// A five digit frequent parking number whose last digit is a weighted
/// modulo-11 check digit over the first four.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FrequentParkerNumber(String);

impl FrequentParkerNumber {
    /// Creates a frequent parking number, validating length and check digit.
    ///
    /// # Errors
    /// Returns `ParseError::EmptyInput` for blank input and
    /// `ParseError::InvalidFrequentParkerNumber` otherwise.
    pub fn new(raw: &str) -> Result<Self, ParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let digits: Vec<u32> = trimmed.chars().filter_map(|c| c.to_digit(10)).collect();
        if digits.len() != FREQUENT_PARKER_NUMBER_LEN
            || trimmed.len() != FREQUENT_PARKER_NUMBER_LEN
            || !has_valid_check_digit(&digits)
        {
            return Err(ParseError::InvalidFrequentParkerNumber(trimmed.to_owned()));
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn has_valid_check_digit(digits: &[u32]) -> bool {
    let Some((check, body)) = digits.split_last() else {
        return false;
    };
    let sum: u32 = body.iter().zip(CHECK_DIGIT_WEIGHTS).map(|(d, w)| d * w).sum();
    sum % CHECK_DIGIT_MODULUS == *check
}

impl FromStr for FrequentParkerNumber {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for FrequentParkerNumber {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<FrequentParkerNumber> for String {
    fn from(number: FrequentParkerNumber) -> Self {
        number.0
    }
}

/// Resolves an optional frequent parking number to the discount flag.
/// A missing number means no benefits; so does an invalid one, which is
/// logged and otherwise ignored.
pub fn is_frequent_parker(raw: Option<&str>) -> bool {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => false,
        Some(number) => match FrequentParkerNumber::new(number) {
            Ok(_) => true,
            Err(err) => {
                warn!(%err, "pricing without frequent parker benefits");
                false
            }
        },
    }
}
