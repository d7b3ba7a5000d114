use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Weekday};
use serde::Serialize;

use crate::{ParseError, SlotKind, TIMESTAMP_FORMAT, parse_timestamp, prelude::*};

/// A parking stay from arrival to departure.
/// Departure is always strictly after arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[display(
    fmt = "{} -> {}",
    "arrival.format(TIMESTAMP_FORMAT)",
    "departure.format(TIMESTAMP_FORMAT)"
)]
pub struct StayInterval {
    arrival:   NaiveDateTime,
    departure: NaiveDateTime,
}

/// Error type for stay construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StayError {
    /// Departure is at or before arrival.
    #[error("Invalid stay: departure ({departure}) is not after arrival ({arrival})")]
    InvalidInterval {
        arrival:   NaiveDateTime,
        departure: NaiveDateTime,
    },

    /// Error parsing a timestamp.
    #[error(transparent)]
    ParseError(#[from] ParseError),
}

impl StayInterval {
    /// Creates a new stay with validation.
    ///
    /// # Errors
    /// Returns `StayError::InvalidInterval` if departure <= arrival.
    pub fn new(arrival: NaiveDateTime, departure: NaiveDateTime) -> Result<Self, StayError> {
        if departure <= arrival {
            return Err(StayError::InvalidInterval { arrival, departure });
        }
        Ok(Self { arrival, departure })
    }

    /// Creates a stay from two `YYYY-MM-DD HH:MM` timestamps.
    ///
    /// # Errors
    /// Returns `StayError::ParseError` for malformed timestamps and
    /// `StayError::InvalidInterval` if departure <= arrival.
    pub fn parse(arrival: &str, departure: &str) -> Result<Self, StayError> {
        Self::new(parse_timestamp(arrival)?, parse_timestamp(departure)?)
    }

    pub const fn arrival(&self) -> NaiveDateTime {
        self.arrival
    }

    pub const fn departure(&self) -> NaiveDateTime {
        self.departure
    }

    pub fn duration(&self) -> TimeDelta {
        self.departure - self.arrival
    }

    /// Splits the stay into the occupied portion of every calendar day it
    /// touches, arrival day and departure day included.
    pub fn days(&self) -> impl Iterator<Item = DaySegment> + use<> {
        let Self { arrival, departure } = *self;
        let last = departure.date();
        std::iter::successors(Some(arrival.date()), NaiveDate::succ_opt)
            .take_while(move |date| *date <= last)
            .map(move |date| {
                let midnight = date.and_time(NaiveTime::MIN);
                // The last representable date has no next midnight; departure falls on it.
                let end = midnight
                    .checked_add_signed(TimeDelta::days(1))
                    .map_or(departure, |next_midnight| departure.min(next_midnight));
                DaySegment {
                    date,
                    start: arrival.max(midnight) - midnight,
                    end: end - midnight,
                }
            })
    }
}

/// The part of a stay that falls on one calendar day, as offsets from that
/// day's midnight. A stay that leaves exactly at midnight yields a final
/// segment with `start == end == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DaySegment {
    date:  NaiveDate,
    start: TimeDelta,
    end:   TimeDelta,
}

impl DaySegment {
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    pub const fn start(&self) -> TimeDelta {
        self.start
    }

    pub const fn end(&self) -> TimeDelta {
        self.end
    }

    /// Whether the segment reaches into `slot`, compared by time of day.
    /// Touching a bound counts, so a zero-length segment at 00:00 touches
    /// the overnight slot.
    pub fn touches(&self, slot: SlotKind) -> bool {
        let (slot_start, slot_end) = slot_bounds(slot);
        self.start.max(slot_start) <= self.end.min(slot_end)
    }

    /// Time spent inside `slot`; zero when the segment misses it.
    pub fn overlap(&self, slot: SlotKind) -> TimeDelta {
        let (slot_start, slot_end) = slot_bounds(slot);
        (self.end.min(slot_end) - self.start.max(slot_start)).max(TimeDelta::zero())
    }
}

fn slot_bounds(slot: SlotKind) -> (TimeDelta, TimeDelta) {
    (TimeDelta::seconds(slot.start()), TimeDelta::seconds(slot.end()))
}
