use crate::consts::{
    DAYTIME_END, DAYTIME_REFERENCE, DAYTIME_START, EVENING_END, EVENING_REFERENCE, EVENING_START,
    MONEY_DECIMAL_PLACES, OVERNIGHT_END, OVERNIGHT_REFERENCE, OVERNIGHT_START,
};
use crate::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

/// A monetary amount backed by an exact decimal.
/// Displays with two decimal places.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Deref,
    Serialize,
    Deserialize,
)]
#[display(fmt = "{:.2}", _0)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero amount
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates an amount from a number of cents
    #[inline]
    pub fn new(cents: i64) -> Self {
        Self(Decimal::new(cents, MONEY_DECIMAL_PLACES))
    }

    /// Returns the underlying decimal
    #[inline]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    pub fn is_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Rounds half away from zero to `MONEY_DECIMAL_PLACES`, always keeping
    /// exactly that many places.
    #[must_use]
    pub fn round(self) -> Self {
        let mut rounded = self
            .0
            .round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(MONEY_DECIMAL_PLACES);
        Self(rounded)
    }

    /// Multiplies by a whole quantity such as a number of hours
    #[must_use]
    pub fn times(self, quantity: Decimal) -> Self {
        Self(self.0 * quantity)
    }

    /// Keeps `percent` hundredths of the amount
    #[must_use]
    pub fn percent(self, percent: i64) -> Self {
        Self(self.0 * Decimal::from(percent) / Decimal::ONE_HUNDRED)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// One of the three fixed daily time windows that carry their own pricing rule.
///
/// Bounds are seconds from midnight and inclusive on both ends, so the
/// windows read `00:00-07:59`, `08:00-16:59` and `17:00-23:59:59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum SlotKind {
    #[display(fmt = "00:00-07:59")]
    Overnight,
    #[display(fmt = "08:00-16:59")]
    Daytime,
    #[display(fmt = "17:00-23:59")]
    Evening,
}

impl SlotKind {
    /// All slots in clock order
    pub const ALL: [Self; 3] = [Self::Overnight, Self::Daytime, Self::Evening];

    /// First second of the slot
    pub const fn start(self) -> i64 {
        match self {
            Self::Overnight => OVERNIGHT_START,
            Self::Daytime => DAYTIME_START,
            Self::Evening => EVENING_START,
        }
    }

    /// Last second of the slot (inclusive)
    pub const fn end(self) -> i64 {
        match self {
            Self::Overnight => OVERNIGHT_END,
            Self::Daytime => DAYTIME_END,
            Self::Evening => EVENING_END,
        }
    }

    /// Clock time that decides which discount tier the slot falls into
    pub const fn reference(self) -> i64 {
        match self {
            Self::Overnight => OVERNIGHT_REFERENCE,
            Self::Daytime => DAYTIME_REFERENCE,
            Self::Evening => EVENING_REFERENCE,
        }
    }
}
