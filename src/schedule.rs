use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{DAYS_PER_WEEK, Money, OVERAGE_MULTIPLIER, SlotKind};

/// Pricing rule attached to one slot of one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlotRule {
    /// Charged once per day when the stay touches the slot at all
    FlatFee { amount: Money },
    /// Charged per rounded hour; hours past `max_stay_hours` cost
    /// `OVERAGE_MULTIPLIER` times the price. `None` means uncapped.
    Hourly {
        price_per_hour: Money,
        max_stay_hours: Option<u32>,
    },
}

impl SlotRule {
    /// Fee for `hours` whole hours under an hourly rule. Flat rules ignore the
    /// hour count and always return their amount.
    pub fn fee_for_hours(&self, hours: Decimal) -> Money {
        match *self {
            Self::FlatFee { amount } => amount,
            Self::Hourly {
                price_per_hour,
                max_stay_hours,
            } => match max_stay_hours.map(Decimal::from) {
                Some(cap) if hours > cap => {
                    let overage = price_per_hour.times(Decimal::from(OVERAGE_MULTIPLIER));
                    price_per_hour.times(cap) + overage.times(hours - cap)
                }
                _ => price_per_hour.times(hours),
            },
        }
    }

    fn has_negative_amount(&self) -> bool {
        match *self {
            Self::FlatFee { amount } => amount.is_negative(),
            Self::Hourly { price_per_hour, .. } => price_per_hour.is_negative(),
        }
    }
}

/// The three slot rules of a single weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRates {
    pub overnight: SlotRule,
    pub daytime:   SlotRule,
    pub evening:   SlotRule,
}

impl DayRates {
    /// Returns the rule for `slot`
    pub const fn rule(&self, slot: SlotKind) -> &SlotRule {
        match slot {
            SlotKind::Overnight => &self.overnight,
            SlotKind::Daytime => &self.daytime,
            SlotKind::Evening => &self.evening,
        }
    }
}

/// Error type for rate schedule construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// A slot carries a price below zero.
    #[error("Negative amount in {slot} slot on {weekday}")]
    NegativeAmount { weekday: Weekday, slot: SlotKind },
}

/// Immutable weekly rate table, indexed Monday first.
///
/// Serialized as an array of seven [`DayRates`]; deserialization runs the same
/// validation as [`RateSchedule::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[DayRates; 7]", into = "[DayRates; 7]")]
pub struct RateSchedule {
    days: [DayRates; DAYS_PER_WEEK],
}

impl RateSchedule {
    /// Creates a schedule from Monday-first day rates.
    ///
    /// # Errors
    /// Returns `ScheduleError::NegativeAmount` if any slot price is negative.
    pub fn new(days: [DayRates; DAYS_PER_WEEK]) -> Result<Self, ScheduleError> {
        for (weekday, rates) in week().zip(days.iter()) {
            if let Some(slot) = SlotKind::ALL
                .into_iter()
                .find(|slot| rates.rule(*slot).has_negative_amount())
            {
                return Err(ScheduleError::NegativeAmount { weekday, slot });
            }
        }
        Ok(Self { days })
    }

    /// The lot's posted rates: weekdays 10.00/h capped at 2h, Saturday
    /// 3.00/h capped at 4h, Sunday 2.00/h capped at 8h, every evening
    /// 5.00/h uncapped and every night a flat 20.00.
    pub fn standard() -> Self {
        fn day(price_cents: i64, cap: u32) -> DayRates {
            DayRates {
                overnight: SlotRule::FlatFee {
                    amount: Money::new(2000),
                },
                daytime:   SlotRule::Hourly {
                    price_per_hour: Money::new(price_cents),
                    max_stay_hours: Some(cap),
                },
                evening:   SlotRule::Hourly {
                    price_per_hour: Money::new(500),
                    max_stay_hours: None,
                },
            }
        }

        let weekday = day(1000, 2);
        Self {
            days: [weekday, weekday, weekday, weekday, weekday, day(300, 4), day(200, 8)],
        }
    }

    /// Returns the rates that apply on `weekday`
    pub fn for_weekday(&self, weekday: Weekday) -> &DayRates {
        &self.days[weekday.num_days_from_monday() as usize]
    }

    /// Returns all day rates, Monday first
    pub const fn days(&self) -> &[DayRates; DAYS_PER_WEEK] {
        &self.days
    }
}

impl Default for RateSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<[DayRates; DAYS_PER_WEEK]> for RateSchedule {
    type Error = ScheduleError;

    fn try_from(days: [DayRates; DAYS_PER_WEEK]) -> Result<Self, Self::Error> {
        Self::new(days)
    }
}

impl From<RateSchedule> for [DayRates; DAYS_PER_WEEK] {
    fn from(schedule: RateSchedule) -> Self {
        schedule.days
    }
}

fn week() -> impl Iterator<Item = Weekday> {
    std::iter::successors(Some(Weekday::Mon), |d| Some(d.succ())).take(DAYS_PER_WEEK)
}
