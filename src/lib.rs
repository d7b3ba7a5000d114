mod calculator;
mod consts;
mod discount;
mod ident;
mod prelude;
mod schedule;
mod stay;
mod types;

pub use calculator::{DailyFee, FeeCalculator, billable_hours};
pub use consts::*;
pub use discount::DiscountTier;
pub use ident::{CarId, FrequentParkerNumber, is_frequent_parker};
pub use schedule::{DayRates, RateSchedule, ScheduleError, SlotRule};
pub use stay::{DaySegment, StayError, StayInterval};
pub use types::{Money, SlotKind};

use crate::prelude::*;
use chrono::NaiveDateTime;

/// Errors raised while turning user input into calculator arguments.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid timestamp: {_0} (expected YYYY-MM-DD HH:MM)")]
    InvalidTimestamp(String),
    #[display(fmt = "Invalid car identity: {_0} (expected e.g. 59C-12345)")]
    InvalidCarId(String),
    #[display(fmt = "Invalid frequent parking number: {_0}")]
    InvalidFrequentParkerNumber(String),
    #[display(fmt = "Empty input")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Parses a `YYYY-MM-DD HH:MM` timestamp.
///
/// # Errors
/// Returns `ParseError::EmptyInput` for blank input and
/// `ParseError::InvalidTimestamp` when the text does not match the layout.
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT)
        .map_err(|_| ParseError::InvalidTimestamp(trimmed.to_owned()))
}

/// Computes the fee for a stay under the standard rate schedule.
///
/// # Errors
/// Returns `StayError::InvalidInterval` if `departure` is not after `arrival`.
pub fn calculate_fee(
    arrival: NaiveDateTime,
    departure: NaiveDateTime,
    is_frequent_parker: bool,
) -> Result<Money, StayError> {
    FeeCalculator::default().calculate_fee(arrival, departure, is_frequent_parker)
}

#[cfg(test)]
pub(crate) mod test_utils {
    use chrono::{NaiveDate, NaiveDateTime};

    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .expect("test timestamp must be valid")
    }

    pub fn last_instant_of(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_milli_opt(23, 59, 59, 999))
            .expect("test timestamp must be valid")
    }

    pub fn money(cents: i64) -> crate::Money {
        crate::Money::new(cents)
    }
}
