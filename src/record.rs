use crate::prelude::*;
use crate::{CalendarDate, DateError, ErrorKind, Plate, PlateError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One validated `DATE PLATE` line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{date} {plate}")]
pub struct Record {
    date: CalendarDate,
    plate: Plate,
}

/// Error type for whole-line parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// Fewer than two whitespace-separated tokens.
    #[error("Invalid format: expected 'YYYY-MM-DD PLATE'")]
    MissingToken,

    /// More than two whitespace-separated tokens.
    #[error("Too many tokens in input")]
    TooManyTokens,

    #[error(transparent)]
    Date(#[from] DateError),

    #[error(transparent)]
    Plate(#[from] PlateError),
}

impl RecordError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingToken | Self::TooManyTokens => ErrorKind::Format,
            Self::Date(err) => err.kind(),
            Self::Plate(err) => err.kind(),
        }
    }
}

impl Record {
    pub const fn new(date: CalendarDate, plate: Plate) -> Self {
        Self { date, plate }
    }

    /// Parses a line holding exactly a date token and a plate token.
    ///
    /// Any run of whitespace separates tokens, and leading or trailing whitespace is
    /// ignored. The date is checked before the plate.
    ///
    /// # Errors
    /// `MissingToken`/`TooManyTokens` for a wrong token count, otherwise whatever the
    /// date or plate parser reports.
    pub fn parse(line: &str) -> Result<Self, RecordError> {
        let mut tokens = line.split_whitespace();
        let (Some(date), Some(plate)) = (tokens.next(), tokens.next()) else {
            return Err(RecordError::MissingToken);
        };
        if tokens.next().is_some() {
            return Err(RecordError::TooManyTokens);
        }

        let date = CalendarDate::parse(date)?;
        let plate = Plate::parse(plate)?;
        Ok(Self { date, plate })
    }

    pub const fn date(&self) -> &CalendarDate {
        &self.date
    }

    pub const fn plate(&self) -> &Plate {
        &self.plate
    }
}

impl FromStr for Record {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
