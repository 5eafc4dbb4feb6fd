//! Built-in data for the demonstration run and the self-check mode.

use crate::Record;

/// Demonstration batch used when no input file is given.
pub const SAMPLE_LINES: [&str; 7] = [
    "2001-11-12 A000BC",
    "2004-03-10 E003EK",
    "2003-03-10 K009VO",
    "2005-03-10 K009VO",
    "2000-03-10 K009VO",
    "2000-03-15 K009VO",
    "2000-03-11 K009VO",
];

/// Acceptance lines and whether each must parse.
pub const SELF_CHECK_CASES: [(&str, bool); 8] = [
    ("2001-11-12 A000BC", true),
    ("2000-02-30 K009VO", false), // no such day
    ("2000-13-01 X123YZ", false), // month 13
    ("bad input", false),
    ("2005-01-01", false),        // plate missing
    ("2005-01-01 a000bc", false), // lowercase plate
    ("2005-01-01 A000BC", true),
    ("1999-12-31 Z999ZZ", true),
];

/// A self-check case whose outcome did not match its expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfCheckFailure {
    /// 1-based case number
    pub case: usize,
    pub input: &'static str,
    pub expected_valid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfCheckSummary {
    pub passed: usize,
    pub total: usize,
    pub failures: Vec<SelfCheckFailure>,
}

impl SelfCheckSummary {
    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

/// Parses every [`SELF_CHECK_CASES`] line and compares the outcome to its expectation.
pub fn run_self_check() -> SelfCheckSummary {
    let failures: Vec<SelfCheckFailure> = SELF_CHECK_CASES
        .iter()
        .enumerate()
        .filter(|(_, (input, expected_valid))| Record::parse(input).is_ok() != *expected_valid)
        .map(|(index, &(input, expected_valid))| SelfCheckFailure {
            case: index + 1,
            input,
            expected_valid,
        })
        .collect();

    SelfCheckSummary {
        passed: SELF_CHECK_CASES.len() - failures.len(),
        total: SELF_CHECK_CASES.len(),
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordCollection;

    #[test]
    fn test_self_check_passes() {
        let summary = run_self_check();
        assert_eq!(summary.total, 8);
        assert_eq!(summary.passed, 8);
        assert!(summary.failures.is_empty());
        assert!(summary.all_passed());
    }

    #[test]
    fn test_sample_lines_are_all_valid() {
        let mut collection = RecordCollection::new();
        let report = collection.ingest(SAMPLE_LINES);
        assert!(report.is_clean());
        assert_eq!(collection.len(), SAMPLE_LINES.len());
    }
}
