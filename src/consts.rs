/// Number of weekdays in a rate schedule (Monday first)
pub const DAYS_PER_WEEK: usize = 7;

/// Seconds in one hour
pub const SECONDS_PER_HOUR: i64 = 3_600;
/// Milliseconds in one hour, used for overlap-to-hours conversion
pub(crate) const MILLIS_PER_HOUR: i64 = SECONDS_PER_HOUR * 1_000;

/// Overnight slot start (00:00), seconds from midnight
pub const OVERNIGHT_START: i64 = 0;
/// Overnight slot end (07:59), inclusive
pub const OVERNIGHT_END: i64 = 7 * SECONDS_PER_HOUR + 59 * 60;

/// Daytime slot start (08:00), seconds from midnight
pub const DAYTIME_START: i64 = 8 * SECONDS_PER_HOUR;
/// Daytime slot end (16:59), inclusive
pub const DAYTIME_END: i64 = 16 * SECONDS_PER_HOUR + 59 * 60;

/// Evening slot start (17:00), seconds from midnight
pub const EVENING_START: i64 = 17 * SECONDS_PER_HOUR;
/// Evening slot end (23:59:59), inclusive
pub const EVENING_END: i64 = 23 * SECONDS_PER_HOUR + 59 * 60 + 59;

/// Reference time deciding the overnight slot's discount tier (01:00)
pub const OVERNIGHT_REFERENCE: i64 = SECONDS_PER_HOUR;
/// Reference time deciding the daytime slot's discount tier (08:00)
pub const DAYTIME_REFERENCE: i64 = DAYTIME_START;
/// Reference time deciding the evening slot's discount tier (17:00)
pub const EVENING_REFERENCE: i64 = EVENING_START;

/// Hours past the cap are billed at this multiple of the hourly price
pub const OVERAGE_MULTIPLIER: i64 = 2;

/// Frequent parkers pay this share (in percent) overnight and in the evening
pub const OFF_PEAK_PAYABLE_PERCENT: i64 = 50;
/// Frequent parkers pay this share (in percent) during the day
pub const DAYTIME_PAYABLE_PERCENT: i64 = 90;

/// Decimal places kept on every returned amount
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Accepted timestamp layout (`YYYY-MM-DD HH:MM`)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Digits in a frequent parking number, check digit included
pub const FREQUENT_PARKER_NUMBER_LEN: usize = 5;
/// Modulus of the frequent parking number check digit
pub(crate) const CHECK_DIGIT_MODULUS: u32 = 11;
/// Weights applied to the first four digits of a frequent parking number
pub(crate) const CHECK_DIGIT_WEIGHTS: [u32; 4] = [2, 3, 4, 5];

/// Leading digits of a car identity (`59` in `59C-12345`)
pub(crate) const CAR_ID_PREFIX_DIGITS: usize = 2;
/// Separator between the series letter and the serial number
pub const CAR_ID_SEPARATOR: char = '-';
/// Shortest serial number after the separator
pub(crate) const CAR_ID_SERIAL_MIN: usize = 4;
/// Longest serial number after the separator
pub(crate) const CAR_ID_SERIAL_MAX: usize = 5;
