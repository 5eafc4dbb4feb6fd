/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;

/// Maximum valid year (inclusive), bounded by the four-digit year field
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Longest month length, the only bound a day has without its month
pub const MAX_DAY: u8 = 31;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Exact length of a `YYYY-MM-DD` date token
pub const DATE_LEN: usize = 10;
/// Byte offset of the separator between year and month
pub const YEAR_SEPARATOR_POS: usize = 4;
/// Byte offset of the separator between month and day
pub const MONTH_SEPARATOR_POS: usize = 7;

/// Hour of day used when building the normalization timestamp.
/// Noon keeps the round trip clear of any midnight boundary.
pub const NORMALIZATION_HOUR: i64 = 12;
/// Seconds in one civil day
pub const SECONDS_PER_DAY: i64 = 86_400;
/// Seconds in one hour
pub const SECONDS_PER_HOUR: i64 = 3_600;
