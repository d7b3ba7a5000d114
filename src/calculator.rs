use chrono::{NaiveDate, NaiveDateTime, TimeDelta, Weekday};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tracing::{debug, trace};

use crate::consts::MILLIS_PER_HOUR;
use crate::{DaySegment, DiscountTier, Money, RateSchedule, SlotKind, SlotRule, StayError, StayInterval};

/// Rounds an overlap to whole hours, half an hour and above rounding up.
pub fn billable_hours(overlap: TimeDelta) -> Decimal {
    if overlap <= TimeDelta::zero() {
        return Decimal::ZERO;
    }
    (Decimal::from(overlap.num_milliseconds()) / Decimal::from(MILLIS_PER_HOUR))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Discounted fees charged for one calendar day of a stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyFee {
    pub date:      NaiveDate,
    pub weekday:   Weekday,
    pub overnight: Money,
    pub daytime:   Money,
    pub evening:   Money,
}

impl DailyFee {
    pub const fn slot(&self, slot: SlotKind) -> Money {
        match slot {
            SlotKind::Overnight => self.overnight,
            SlotKind::Daytime => self.daytime,
            SlotKind::Evening => self.evening,
        }
    }

    /// Sum of the three slots, unrounded
    pub fn total(&self) -> Money {
        SlotKind::ALL.into_iter().map(|slot| self.slot(slot)).sum()
    }
}

/// Prices stays against a fixed [`RateSchedule`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeeCalculator {
    schedule: RateSchedule,
}

impl FeeCalculator {
    pub const fn new(schedule: RateSchedule) -> Self {
        Self { schedule }
    }

    pub const fn schedule(&self) -> &RateSchedule {
        &self.schedule
    }

    /// Validates the interval and prices it.
    ///
    /// # Errors
    /// Returns `StayError::InvalidInterval` if `departure` is not after `arrival`.
    pub fn calculate_fee(
        &self,
        arrival: NaiveDateTime,
        departure: NaiveDateTime,
        is_frequent_parker: bool,
    ) -> Result<Money, StayError> {
        let stay = StayInterval::new(arrival, departure)?;
        Ok(self.calculate(&stay, is_frequent_parker))
    }

    /// Total fee for `stay`, rounded to cents.
    pub fn calculate(&self, stay: &StayInterval, is_frequent_parker: bool) -> Money {
        let total = stay
            .days()
            .map(|segment| self.daily_fee(&segment, is_frequent_parker).total())
            .sum::<Money>()
            .round();
        debug!(%stay, is_frequent_parker, %total, "calculated parking fee");
        total
    }

    /// Per-day, per-slot fees for `stay` after discounts, before the final
    /// rounding applied by [`FeeCalculator::calculate`].
    pub fn breakdown(&self, stay: &StayInterval, is_frequent_parker: bool) -> Vec<DailyFee> {
        stay.days()
            .map(|segment| self.daily_fee(&segment, is_frequent_parker))
            .collect()
    }

    fn daily_fee(&self, segment: &DaySegment, is_frequent_parker: bool) -> DailyFee {
        let rates = self.schedule.for_weekday(segment.weekday());
        let charge = |slot: SlotKind| {
            let fee = slot_fee(rates.rule(slot), slot, segment);
            let tier = DiscountTier::for_slot(is_frequent_parker, slot);
            trace!(%slot, %tier, %fee, "slot fee before discount");
            tier.apply(fee)
        };

        let daily = DailyFee {
            date:      segment.date(),
            weekday:   segment.weekday(),
            overnight: charge(SlotKind::Overnight),
            daytime:   charge(SlotKind::Daytime),
            evening:   charge(SlotKind::Evening),
        };
        trace!(
            date = %daily.date,
            overnight = %daily.overnight,
            daytime = %daily.daytime,
            evening = %daily.evening,
            "priced day"
        );
        daily
    }
}

fn slot_fee(rule: &SlotRule, slot: SlotKind, segment: &DaySegment) -> Money {
    match rule {
        SlotRule::FlatFee { amount } if segment.touches(slot) => *amount,
        SlotRule::FlatFee { .. } => Money::ZERO,
        SlotRule::Hourly { .. } => {
            let hours = billable_hours(segment.overlap(slot));
            if hours.is_zero() {
                Money::ZERO
            } else {
                rule.fee_for_hours(hours)
            }
        }
    }
}
