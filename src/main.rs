use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use plate_dates::logging::{DEFAULT_LOG_LEVEL, LoggingError, init_logging};
use plate_dates::sample::{SAMPLE_LINES, run_self_check};
use plate_dates::{RecordCollection, Selection, SortMode};

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("{0}")]
    Logging(#[from] LoggingError),

    #[error("failed to read `{}`: {source}", path.display())]
    ReadInput { path: PathBuf, source: io::Error },

    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Debug)]
enum SortArg {
    /// Earliest date first
    Date,
    /// By the first character of the plate
    Plate,
}

impl From<SortArg> for SortMode {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Date => Self::Date,
            SortArg::Plate => Self::PlateLetter,
        }
    }
}

/// Validates `YYYY-MM-DD PLATE` records and prints them in sorted order.
///
/// Lines that fail validation are reported on stderr with their line number and
/// skipped.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Sort order. Omit to be asked interactively.
    #[arg(short, long, value_enum)]
    sort: Option<SortArg>,

    /// Read records from FILE, one per line, instead of the built-in sample
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Print the sorted records as a JSON array
    #[arg(long)]
    json: bool,

    /// Log level for diagnostics on stderr (off, error, warn, info, debug, trace)
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Runs the built-in acceptance lines and reports how many behave as expected
    SelfCheck,
}

fn main() {
    let cli = Cli::parse();

    let _logger = match init_logging(&cli.log_level) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("{}", CliError::from(e));
            std::process::exit(2);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    match run(cli, &mut stdin.lock(), &mut stdout.lock(), &mut stderr.lock()) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

/// Reads the choice from `input`, writes records to `out` and notices to `notices`.
fn run<R: BufRead, W: Write, E: Write>(
    cli: Cli,
    input: &mut R,
    out: &mut W,
    notices: &mut E,
) -> Result<i32, CliError> {
    if let Some(Commands::SelfCheck) = cli.command {
        return self_check(out);
    }

    let lines = load_lines(cli.input.as_ref())?;
    let mut records = RecordCollection::new();
    let report = records.ingest(&lines);
    info!(
        "loaded {} of {} lines",
        report.accepted,
        report.accepted + report.rejected()
    );

    let mode = match cli.sort {
        Some(arg) => SortMode::from(arg),
        None => prompt_for_mode(input, out, notices)?,
    };
    records.sort(mode);

    if cli.json {
        serde_json::to_writer_pretty(&mut *out, records.records())?;
        writeln!(out)?;
    } else {
        for line in records.render() {
            writeln!(out, "{line}")?;
        }
    }
    Ok(0)
}

fn load_lines(path: Option<&PathBuf>) -> Result<Vec<String>, CliError> {
    let Some(path) = path else {
        return Ok(SAMPLE_LINES.iter().map(|&line| line.to_owned()).collect());
    };
    let text = std::fs::read_to_string(path).map_err(|source| CliError::ReadInput {
        path: path.clone(),
        source,
    })?;
    Ok(text.lines().map(str::to_owned).collect())
}

fn prompt_for_mode<R: BufRead, W: Write, E: Write>(
    input: &mut R,
    out: &mut W,
    notices: &mut E,
) -> Result<SortMode, CliError> {
    writeln!(out, "Choose a sort order:")?;
    writeln!(out, "1 - by date")?;
    writeln!(out, "2 - by first plate letter")?;
    write!(out, "Your choice: ")?;
    out.flush()?;

    let mut choice = String::new();
    input.read_line(&mut choice)?;

    let selection = Selection::parse(&choice);
    if let Selection::Defaulted { input } = &selection {
        writeln!(notices, "Unrecognized choice `{input}`. Sorting by date.")?;
    }
    Ok(selection.mode())
}

fn self_check<W: Write>(out: &mut W) -> Result<i32, CliError> {
    let summary = run_self_check();
    for failure in &summary.failures {
        writeln!(
            out,
            "Case {} failed for: {} (expected {})",
            failure.case,
            failure.input,
            if failure.expected_valid { "valid" } else { "invalid" }
        )?;
    }
    writeln!(out, "Passed {} / {}", summary.passed, summary.total)?;
    Ok(if summary.all_passed() { 0 } else { 1 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_with(args: &[&str], stdin: &str) -> (i32, String) {
        let (code, out, _) = run_capturing(args, stdin);
        (code, out)
    }

    fn run_capturing(args: &[&str], stdin: &str) -> (i32, String, String) {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut input = Cursor::new(stdin.as_bytes().to_vec());
        let mut out = Vec::new();
        let mut notices = Vec::new();
        let code = run(cli, &mut input, &mut out, &mut notices).unwrap();
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(notices).unwrap(),
        )
    }

    #[test]
    fn test_sort_by_date_flag() {
        let (code, out) = run_with(&["plate-dates", "--sort", "date"], "");
        assert_eq!(code, 0);
        assert_eq!(
            out.lines().collect::<Vec<_>>(),
            vec![
                "2000-03-10 K009VO",
                "2000-03-11 K009VO",
                "2000-03-15 K009VO",
                "2001-11-12 A000BC",
                "2003-03-10 K009VO",
                "2004-03-10 E003EK",
                "2005-03-10 K009VO",
            ]
        );
    }

    #[test]
    fn test_sort_by_plate_flag() {
        let (_, out) = run_with(&["plate-dates", "-s", "plate"], "");
        assert_eq!(
            out.lines().collect::<Vec<_>>(),
            vec![
                "2001-11-12 A000BC",
                "2004-03-10 E003EK",
                "2003-03-10 K009VO",
                "2005-03-10 K009VO",
                "2000-03-10 K009VO",
                "2000-03-15 K009VO",
                "2000-03-11 K009VO",
            ]
        );
    }

    #[test]
    fn test_interactive_choice() {
        let (_, out, notices) = run_capturing(&["plate-dates"], "2\n");
        assert!(notices.is_empty());
        assert!(out.starts_with("Choose a sort order:\n1 - by date\n"));
        let listed: Vec<_> = out.lines().skip(3).collect();
        assert_eq!(listed[0], "Your choice: 2001-11-12 A000BC");
        assert_eq!(listed[1], "2004-03-10 E003EK");
    }

    #[test]
    fn test_interactive_unknown_choice_defaults_to_date() {
        let (code, out, notices) = run_capturing(&["plate-dates"], "9\n");
        assert_eq!(code, 0);
        assert_eq!(notices, "Unrecognized choice `9`. Sorting by date.\n");
        let listed: Vec<_> = out.lines().skip(3).collect();
        assert_eq!(listed[0], "Your choice: 2000-03-10 K009VO");
        assert_eq!(listed.last(), Some(&"2005-03-10 K009VO"));
    }

    #[test]
    fn test_json_output() {
        let (_, out) = run_with(&["plate-dates", "--sort", "date", "--json"], "");
        let parsed: Vec<plate_dates::Record> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.len(), SAMPLE_LINES.len());
        assert_eq!(parsed[0].to_string(), "2000-03-10 K009VO");
    }

    #[test]
    fn test_self_check_command() {
        let (code, out) = run_with(&["plate-dates", "self-check"], "");
        assert_eq!(code, 0);
        assert_eq!(out, "Passed 8 / 8\n");
    }

    #[test]
    fn test_missing_input_file() {
        let cli = Cli::try_parse_from(["plate-dates", "--input", "/nonexistent/plates.txt"]).unwrap();
        let err = run(cli, &mut Cursor::new(Vec::new()), &mut Vec::new(), &mut Vec::new())
            .unwrap_err();
        assert!(matches!(err, CliError::ReadInput { .. }));
    }

    #[test]
    fn test_unknown_sort_value_is_rejected_by_clap() {
        assert!(Cli::try_parse_from(["plate-dates", "--sort", "color"]).is_err());
    }
}
