//! Proleptic Gregorian arithmetic.
//!
//! The validity checks work on plain integers so callers can ask about values that
//! do not fit the validated component types. The day-count conversions are the
//! normalization engine used by [`CalendarDate::parse`](crate::CalendarDate::parse):
//! they roll out-of-range days and months over the way a system calendar would,
//! without touching any time-zone state.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MIN_DAY, MIN_YEAR, NORMALIZATION_HOUR, SECONDS_PER_DAY, SECONDS_PER_HOUR,
};

/// Days in one 400-year Gregorian cycle
const DAYS_PER_ERA: i64 = 146_097;
/// Days from 0000-03-01 to 1970-01-01
const EPOCH_SHIFT: i64 = 719_468;

/// Gregorian leap-year rule, applied uniformly to every integer year.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Length of `month` in `year`, or 0 when `month` is not in `1..=12`.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    if month == 0 || month > MAX_MONTH as u32 {
        return 0;
    }
    if month == FEBRUARY as u32 && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP as u32
    } else {
        DAYS_IN_MONTH[month as usize] as u32
    }
}

/// Whether `(year, month, day)` names a real day, with `year >= 1`.
pub const fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
    if year < MIN_YEAR as i32 || month == 0 || month > MAX_MONTH as u32 || day < MIN_DAY as u32 {
        return false;
    }
    day <= days_in_month(year, month)
}

/// Day count of a civil date relative to 1970-01-01.
///
/// Out-of-range components are rolled over rather than rejected: month 13 is
/// January of the next year, day 32 of January is February 1, day 0 is the last
/// day of the previous month.
pub fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let month_index = i64::from(month) - 1;
    let year = i64::from(year) + month_index.div_euclid(12);
    let month = month_index.rem_euclid(12) + 1;

    // Count from March so the leap day falls at the end of the year.
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let shifted_month = (month + 9) % 12;
    let day_of_year = (153 * shifted_month + 2) / 5 + i64::from(day) - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

    era * DAYS_PER_ERA + day_of_era - EPOCH_SHIFT
}

/// Civil date of a day count relative to 1970-01-01. Inverse of [`days_from_civil`].
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let shifted = days + EPOCH_SHIFT;
    let era = shifted.div_euclid(DAYS_PER_ERA);
    let day_of_era = shifted - era * DAYS_PER_ERA;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;

    // month is in 1..=12 and day in 1..=31, both fit u32
    let day = (day_of_year - (153 * shifted_month + 2) / 5 + 1) as u32;
    let month = (if shifted_month < 10 { shifted_month + 3 } else { shifted_month - 9 }) as u32;
    let year = year_of_era + era * 400 + if month <= 2 { 1 } else { 0 };

    (year, month, day)
}

/// Seconds since 1970-01-01T00:00:00 at noon of the given civil date.
pub fn noon_timestamp(year: i32, month: u32, day: u32) -> i64 {
    days_from_civil(year, month, day) * SECONDS_PER_DAY + NORMALIZATION_HOUR * SECONDS_PER_HOUR
}

/// Sends a civil date through a noon timestamp and back.
///
/// A real calendar day comes back unchanged; anything else comes back rolled over
/// to the day it would denote.
pub fn normalize(year: i32, month: u32, day: u32) -> (i64, u32, u32) {
    let timestamp = noon_timestamp(year, month, day);
    civil_from_days(timestamp.div_euclid(SECONDS_PER_DAY))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2000, true)]
    #[case(2004, true)]
    #[case(2024, true)]
    #[case(1900, false)]
    #[case(2100, false)]
    #[case(2001, false)]
    #[case(0, true)]
    #[case(-4, true)]
    #[case(-100, false)]
    fn test_is_leap_year(#[case] year: i32, #[case] expected: bool) {
        assert_eq!(is_leap_year(year), expected);
    }

    #[rstest]
    #[case(2001, 1, 31)]
    #[case(2001, 2, 28)]
    #[case(2000, 2, 29)]
    #[case(1900, 2, 28)]
    #[case(2001, 4, 30)]
    #[case(2001, 12, 31)]
    #[case(2001, 0, 0)]
    #[case(2001, 13, 0)]
    fn test_days_in_month(#[case] year: i32, #[case] month: u32, #[case] expected: u32) {
        assert_eq!(days_in_month(year, month), expected);
    }

    #[test]
    fn test_is_valid_date() {
        assert!(is_valid_date(2000, 2, 29));
        assert!(is_valid_date(1, 1, 1));
        assert!(is_valid_date(9999, 12, 31));
        assert!(!is_valid_date(2001, 2, 29));
        assert!(!is_valid_date(2000, 2, 30));
        assert!(!is_valid_date(2000, 13, 1));
        assert!(!is_valid_date(2000, 0, 1));
        assert!(!is_valid_date(2000, 1, 0));
        assert!(!is_valid_date(0, 1, 1));
        assert!(!is_valid_date(-5, 1, 1));
    }

    #[test]
    fn test_epoch_anchor() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(days_from_civil(1970, 1, 2), 1);
        assert_eq!(days_from_civil(1969, 12, 31), -1);
        assert_eq!(days_from_civil(2000, 3, 1), 11_017);
        assert_eq!(civil_from_days(0), (1970, 1, 1));
        assert_eq!(civil_from_days(11_017), (2000, 3, 1));
    }

    #[test]
    fn test_day_count_is_inverse_over_every_day_of_a_leap_cycle() {
        let start = days_from_civil(1999, 1, 1);
        let end = days_from_civil(2005, 1, 1);
        for days in start..end {
            let (year, month, day) = civil_from_days(days);
            let year = i32::try_from(year).unwrap();
            assert!(is_valid_date(year, month, day));
            assert_eq!(days_from_civil(year, month, day), days);
        }
        // 1999..2005 covers exactly two leap days
        assert_eq!(end - start, 6 * 365 + 2);
    }

    #[test]
    fn test_first_and_last_supported_days() {
        assert_eq!(civil_from_days(days_from_civil(1, 1, 1)), (1, 1, 1));
        assert_eq!(civil_from_days(days_from_civil(9999, 12, 31)), (9999, 12, 31));
    }

    #[rstest]
    #[case((2000, 2, 30), (2000, 3, 1))]
    #[case((2001, 2, 29), (2001, 3, 1))]
    #[case((2001, 1, 32), (2001, 2, 1))]
    #[case((2000, 13, 1), (2001, 1, 1))]
    #[case((2000, 3, 0), (2000, 2, 29))]
    #[case((1999, 12, 31), (1999, 12, 31))]
    fn test_normalize_rolls_over(#[case] input: (i32, u32, u32), #[case] expected: (i64, u32, u32)) {
        assert_eq!(normalize(input.0, input.1, input.2), expected);
    }

    #[test]
    fn test_noon_timestamp() {
        assert_eq!(noon_timestamp(1970, 1, 1), 43_200);
        assert_eq!(noon_timestamp(1969, 12, 31), -43_200);
    }
}
