//! Parse, validate and sort dated vehicle-plate records.
//!
//! A record is a line of the form `YYYY-MM-DD PLATE`. Dates are checked against the
//! proleptic Gregorian calendar twice: once arithmetically, then by a round trip
//! through a day count that must re-render to the exact input. Plates are one or
//! more of `A-Z0-9`.
//!
//! ```
//! use plate_dates::RecordCollection;
//!
//! let mut records = RecordCollection::new();
//! let report = records.ingest(["2004-03-10 E003EK", "2000-02-30 K009VO", "2001-11-12 A000BC"]);
//! assert_eq!(report.failures[0].line, 2);
//!
//! records.sort_by_date();
//! assert_eq!(records.render(), ["2001-11-12 A000BC", "2004-03-10 E003EK"]);
//! ```

mod calendar;
mod collection;
mod consts;
mod date;
pub mod logging;
mod plate;
mod prelude;
mod record;
pub mod sample;
mod types;

pub use calendar::{
    civil_from_days, days_from_civil, days_in_month, is_leap_year, is_valid_date, normalize,
};
pub use collection::{IngestReport, LineFailure, RecordCollection, Selection, SortMode};
pub use consts::*;
pub use date::{CalendarDate, DateError};
pub use plate::{Plate, PlateError, is_valid_plate};
pub use record::{Record, RecordError};
pub use types::{Day, Month, Year};

use crate::prelude::*;

/// The families every parse failure falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ErrorKind {
    /// Structural shape is wrong: length, separators, token count, non-digits.
    #[display(fmt = "format error")]
    Format,
    /// Digits are present but do not name a real day.
    #[display(fmt = "range error")]
    Range,
    /// Arithmetic validation passed but the calendar round trip disagreed.
    #[display(fmt = "normalization error")]
    Normalization,
    /// The plate token is empty or holds characters outside `A-Z0-9`.
    #[display(fmt = "plate format error")]
    PlateFormat,
}
