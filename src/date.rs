use crate::calendar::{days_from_civil, is_valid_date, noon_timestamp, normalize};
use crate::consts::{
    DATE_LEN, DATE_SEPARATOR, MAX_MONTH, MAX_YEAR, MIN_YEAR, MONTH_SEPARATOR_POS,
    YEAR_SEPARATOR_POS,
};
use crate::prelude::*;
use crate::types::{Day, Month, Year};
use crate::ErrorKind;
use std::str::FromStr;

/// A real day of the proleptic Gregorian calendar, years 1 through 9999.
///
/// Ordering is chronological. The only ways in are [`CalendarDate::new`] and
/// [`CalendarDate::parse`], so every value names a day that exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    /// The token does not have the `YYYY-MM-DD` shape.
    #[display(fmt = "{reason}: `{input}`")]
    InvalidFormat { reason: &'static str, input: String },
    #[display(fmt = "Invalid calendar date: year {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid calendar date: month {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid calendar date: day {day} does not exist in {year:04}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    /// The date passed arithmetic validation but did not survive the calendar round trip.
    #[display(fmt = "Normalized date differs from input: `{input}` became `{normalized}`")]
    NormalizationMismatch { input: String, normalized: String },
}

impl std::error::Error for DateError {}

impl DateError {
    /// Which of the error families this failure belongs to.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFormat { .. } => ErrorKind::Format,
            Self::InvalidYear(_) | Self::InvalidMonth(_) | Self::InvalidDay { .. } => {
                ErrorKind::Range
            }
            Self::NormalizationMismatch { .. } => ErrorKind::Normalization,
        }
    }

    fn malformed(reason: &'static str, input: &str) -> Self {
        Self::InvalidFormat {
            reason,
            input: input.to_owned(),
        }
    }

    /// Picks the most specific range error for a triple that failed validation.
    fn out_of_range(year: u16, month: u8, day: u8) -> Self {
        if Year::new(year).is_err() {
            Self::InvalidYear(year)
        } else if Month::new(month).is_err() {
            Self::InvalidMonth(month)
        } else {
            Self::InvalidDay { year, month, day }
        }
    }
}

impl CalendarDate {
    /// Creates a date from its components.
    ///
    /// # Errors
    /// Returns the range error for the first component that is out of bounds.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Parses a `YYYY-MM-DD` token.
    ///
    /// The token is checked for shape, then for calendar validity, and finally sent
    /// through the day-count normalization and re-rendered; the rendering must
    /// reproduce the input exactly.
    ///
    /// # Errors
    /// - `InvalidFormat` for a wrong length, wrong separators or a non-digit field.
    /// - `InvalidYear`, `InvalidMonth` or `InvalidDay` when the digits do not name a
    ///   real day.
    /// - `NormalizationMismatch` when the round trip disagrees with the input.
    pub fn parse(input: &str) -> Result<Self, DateError> {
        let bytes = input.as_bytes();
        if bytes.len() != DATE_LEN {
            return Err(DateError::malformed("Invalid date format", input));
        }
        let separator = DATE_SEPARATOR as u8;
        if bytes[YEAR_SEPARATOR_POS] != separator || bytes[MONTH_SEPARATOR_POS] != separator {
            return Err(DateError::malformed("Invalid separators", input));
        }

        // Both separators are ASCII, so these offsets sit on char boundaries.
        let year_str = &input[..YEAR_SEPARATOR_POS];
        let month_str = &input[YEAR_SEPARATOR_POS + 1..MONTH_SEPARATOR_POS];
        let day_str = &input[MONTH_SEPARATOR_POS + 1..];
        if ![year_str, month_str, day_str]
            .iter()
            .all(|field| field.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(DateError::malformed("Non-digit in date", input));
        }

        let year = Self::parse_field::<u16>(year_str, input)?;
        let month = Self::parse_field::<u8>(month_str, input)?;
        let day = Self::parse_field::<u8>(day_str, input)?;

        if !is_valid_date(i32::from(year), u32::from(month), u32::from(day)) {
            return Err(DateError::out_of_range(year, month, day));
        }
        Self::ensure_round_trip(input, year, month, day)?;

        Self::new(year, month, day)
    }

    fn parse_field<T: FromStr>(field: &str, input: &str) -> Result<T, DateError> {
        field
            .parse::<T>()
            .map_err(|_| DateError::malformed("Non-digit in date", input))
    }

    /// Normalizes `(year, month, day)` through a noon timestamp and requires the
    /// rendering of the result to equal `input`.
    fn ensure_round_trip(input: &str, year: u16, month: u8, day: u8) -> Result<(), DateError> {
        let (n_year, n_month, n_day) =
            normalize(i32::from(year), u32::from(month), u32::from(day));
        let normalized = format!("{n_year:04}-{n_month:02}-{n_day:02}");
        if normalized != input {
            return Err(DateError::NormalizationMismatch {
                input: input.to_owned(),
                normalized,
            });
        }
        Ok(())
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Days since 1970-01-01 (negative before it).
    pub fn days_since_epoch(&self) -> i64 {
        days_from_civil(
            i32::from(self.year()),
            u32::from(self.month()),
            u32::from(self.day()),
        )
    }

    /// Seconds since 1970-01-01T00:00:00 at noon of this day.
    pub fn timestamp(&self) -> i64 {
        noon_timestamp(
            i32::from(self.year()),
            u32::from(self.month()),
            u32::from(self.day()),
        )
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
