use crate::prelude::*;
use crate::{DAYTIME_PAYABLE_PERCENT, DAYTIME_START, EVENING_START, Money, OFF_PEAK_PAYABLE_PERCENT, SlotKind};

/// Frequent-parker discount tier.
///
/// The tier is picked from a slot's reference time rather than from the
/// minutes actually parked, so every slot always lands in the same tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DiscountTier {
    /// Not a frequent parker; full price
    #[display(fmt = "none")]
    Standard,
    /// 17:00 to 08:00; half price
    #[display(fmt = "off-peak")]
    OffPeak,
    /// 08:00 to 17:00; ten percent off
    #[display(fmt = "daytime")]
    Daytime,
}

impl DiscountTier {
    /// Tier for a reference time given in seconds from midnight.
    pub const fn for_reference(is_frequent_parker: bool, seconds_from_midnight: i64) -> Self {
        if !is_frequent_parker {
            Self::Standard
        } else if seconds_from_midnight >= EVENING_START || seconds_from_midnight < DAYTIME_START {
            Self::OffPeak
        } else {
            Self::Daytime
        }
    }

    pub const fn for_slot(is_frequent_parker: bool, slot: SlotKind) -> Self {
        Self::for_reference(is_frequent_parker, slot.reference())
    }

    /// Share of the fee still payable, in percent
    pub const fn payable_percent(self) -> i64 {
        match self {
            Self::Standard => 100,
            Self::OffPeak => OFF_PEAK_PAYABLE_PERCENT,
            Self::Daytime => DAYTIME_PAYABLE_PERCENT,
        }
    }

    pub fn apply(self, fee: Money) -> Money {
        match self {
            Self::Standard => fee,
            Self::OffPeak | Self::Daytime => fee.percent(self.payable_percent()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SECONDS_PER_HOUR;
    use crate::test_utils::money;

    #[test]
    fn test_for_reference_cases() {
        struct TestCase {
            hour:        i64,
            minute:      i64,
            expected:    DiscountTier,
            description: &'static str,
        }

        let cases = [
            TestCase {
                hour:        0,
                minute:      0,
                expected:    DiscountTier::OffPeak,
                description: "midnight",
            },
            TestCase {
                hour:        7,
                minute:      59,
                expected:    DiscountTier::OffPeak,
                description: "last minute before daytime",
            },
            TestCase {
                hour:        8,
                minute:      0,
                expected:    DiscountTier::Daytime,
                description: "daytime start",
            },
            TestCase {
                hour:        16,
                minute:      59,
                expected:    DiscountTier::Daytime,
                description: "last daytime minute",
            },
            TestCase {
                hour:        17,
                minute:      0,
                expected:    DiscountTier::OffPeak,
                description: "evening start",
            },
            TestCase {
                hour:        23,
                minute:      59,
                expected:    DiscountTier::OffPeak,
                description: "late evening",
            },
        ];

        for case in &cases {
            let seconds = case.hour * SECONDS_PER_HOUR + case.minute * 60;
            assert_eq!(
                DiscountTier::for_reference(true, seconds),
                case.expected,
                "{}",
                case.description
            );
            assert_eq!(
                DiscountTier::for_reference(false, seconds),
                DiscountTier::Standard,
                "{} (not frequent)",
                case.description
            );
        }
    }

    #[test]
    fn test_for_slot() {
        assert_eq!(DiscountTier::for_slot(true, SlotKind::Overnight), DiscountTier::OffPeak);
        assert_eq!(DiscountTier::for_slot(true, SlotKind::Daytime), DiscountTier::Daytime);
        assert_eq!(DiscountTier::for_slot(true, SlotKind::Evening), DiscountTier::OffPeak);
        for slot in SlotKind::ALL {
            assert_eq!(DiscountTier::for_slot(false, slot), DiscountTier::Standard);
        }
    }

    #[test]
    fn test_apply() {
        assert_eq!(DiscountTier::Standard.apply(money(2000)), money(2000));
        assert_eq!(DiscountTier::OffPeak.apply(money(2000)), money(1000));
        assert_eq!(DiscountTier::Daytime.apply(money(2000)), money(1800));
        assert_eq!(DiscountTier::Daytime.apply(money(300)), money(270));
        assert_eq!(DiscountTier::OffPeak.apply(Money::ZERO), Money::ZERO);
    }

    #[test]
    fn test_display() {
        assert_eq!(DiscountTier::Standard.to_string(), "none");
        assert_eq!(DiscountTier::OffPeak.to_string(), "off-peak");
        assert_eq!(DiscountTier::Daytime.to_string(), "daytime");
    }
}
