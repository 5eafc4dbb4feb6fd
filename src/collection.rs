use crate::prelude::*;
use crate::{Record, RecordError};
use log::{debug, warn};

/// The two orders a collection can be put in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum SortMode {
    #[display(fmt = "date")]
    Date,
    #[display(fmt = "first plate letter")]
    PlateLetter,
}

/// Outcome of reading a sort choice typed by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Recognized(SortMode),
    /// The input matched nothing; date order applies.
    Defaulted { input: String },
}

impl Selection {
    /// `1` selects date order and `2` plate-letter order, ignoring surrounding
    /// whitespace. Anything else falls back to date order.
    pub fn parse(choice: &str) -> Self {
        match choice.trim() {
            "1" => Self::Recognized(SortMode::Date),
            "2" => Self::Recognized(SortMode::PlateLetter),
            other => Self::Defaulted {
                input: other.to_owned(),
            },
        }
    }

    pub const fn mode(&self) -> SortMode {
        match self {
            Self::Recognized(mode) => *mode,
            Self::Defaulted { .. } => SortMode::Date,
        }
    }

    pub const fn is_defaulted(&self) -> bool {
        matches!(self, Self::Defaulted { .. })
    }
}

/// A line that failed to parse during [`RecordCollection::ingest`].
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "Error in line {line}: {error}")]
pub struct LineFailure {
    /// 1-based position of the line in the ingested batch.
    pub line: usize,
    pub error: RecordError,
}

/// What an ingestion accepted and rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub accepted: usize,
    pub failures: Vec<LineFailure>,
}

impl IngestReport {
    pub fn rejected(&self) -> usize {
        self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// An ordered, exclusively owned sequence of records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordCollection {
    records: Vec<Record>,
}

impl RecordCollection {
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Replaces the contents with every line of `lines` that parses, in input order.
    ///
    /// A bad line never stops the batch. Each one is logged at `warn` and listed in
    /// the returned report under its 1-based line number.
    pub fn ingest<I, S>(&mut self, lines: I) -> IngestReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.clear();
        let mut report = IngestReport::default();

        for (index, line) in lines.into_iter().enumerate() {
            match Record::parse(line.as_ref()) {
                Ok(record) => {
                    self.records.push(record);
                    report.accepted += 1;
                }
                Err(error) => {
                    let failure = LineFailure {
                        line: index + 1,
                        error,
                    };
                    warn!("{failure}");
                    report.failures.push(failure);
                }
            }
        }

        debug!(
            "ingested {} records, rejected {} lines",
            report.accepted,
            report.rejected()
        );
        report
    }

    /// Earliest date first. Records on the same date keep their relative order.
    pub fn sort_by_date(&mut self) {
        self.records.sort_by_key(|record| *record.date());
    }

    /// Orders by the first plate character only. Ties keep their relative order.
    pub fn sort_by_plate_letter(&mut self) {
        self.records.sort_by_key(|record| record.plate().first_char());
    }

    pub fn sort(&mut self, mode: SortMode) {
        debug!("sorting {} records by {mode}", self.records.len());
        match mode {
            SortMode::Date => self.sort_by_date(),
            SortMode::PlateLetter => self.sort_by_plate_letter(),
        }
    }

    /// Canonical `YYYY-MM-DD PLATE` lines in the current order.
    pub fn render(&self) -> Vec<String> {
        self.records.iter().map(ToString::to_string).collect()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a RecordCollection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
