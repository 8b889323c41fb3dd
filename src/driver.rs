//! Line-oriented driver: a count, then that many dates, one weekday per line out.

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::{debug, warn};

use crate::{DateParseError, day_name};

/// What to do with a line that is not a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop at the first bad date.
    #[default]
    Abort,
    /// Log the bad date, write nothing for it, and keep going.
    Skip,
}

impl FromStr for ErrorPolicy {
    type Err = crate::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            _ => Err(crate::ConfigError::InvalidPolicy(s.to_owned())),
        }
    }
}

/// Problems with the shape of the input, as opposed to its dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Missing date count: input is empty")]
    MissingCount,

    #[error("Invalid date count: {0:?} is not a non-negative integer")]
    InvalidCount(String),

    #[error("Expected {expected} dates, but input ended after {found}")]
    MissingLines { expected: usize, found: usize },
}

/// Error type for a driver run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),

    /// A date failed to parse under `ErrorPolicy::Abort`.
    #[error("Line {line}: cannot resolve {input:?}")]
    Date {
        line: usize,
        input: String,
        #[source]
        source: DateParseError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Counts from a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Report {
    /// Dates resolved and written.
    pub resolved: usize,
    /// Dates dropped under `ErrorPolicy::Skip`.
    pub skipped: usize,
}

/// Reads a count and that many dates from `input`, writing one weekday name
/// per line to `output` in input order.
///
/// Lines after the counted dates are left unread.
///
/// # Errors
/// - `RunError::Input` if the count is missing or invalid, or input ends early.
///   An invalid count is reported before any date is parsed.
/// - `RunError::Date` for the first bad date when `policy` is `Abort`.
/// - `RunError::Io` if reading or writing fails.
pub fn run<R, W>(mut input: R, mut output: W, policy: ErrorPolicy) -> Result<Report, RunError>
where
    R: BufRead,
    W: Write,
{
    let expected = read_count(&mut input)?;
    debug!(expected, "read date count");

    let mut report = Report::default();
    let mut buf = Vec::new();

    for index in 0..expected {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            output.flush()?;
            return Err(InputError::MissingLines {
                expected,
                found: index,
            }
            .into());
        }

        // line 1 holds the count
        let line = index + 2;
        let raw = trim_line_ending(&buf);
        let resolved = std::str::from_utf8(raw)
            .map_err(|_| DateParseError::InvalidEncoding)
            .and_then(day_name);
        let date = String::from_utf8_lossy(raw);

        match resolved {
            Ok(name) => {
                debug!(line, date = %date, name, "resolved");
                writeln!(output, "{name}")?;
                report.resolved += 1;
            }
            Err(source) => match policy {
                ErrorPolicy::Abort => {
                    output.flush()?;
                    return Err(RunError::Date {
                        line,
                        input: date.into_owned(),
                        source,
                    });
                }
                ErrorPolicy::Skip => {
                    warn!(line, date = %date, error = %source, "skipping unparseable date");
                    report.skipped += 1;
                }
            },
        }
    }

    output.flush()?;
    Ok(report)
}

fn read_count<R: BufRead>(input: &mut R) -> Result<usize, RunError> {
    let mut first = Vec::new();
    if input.read_until(b'\n', &mut first)? == 0 {
        return Err(InputError::MissingCount.into());
    }

    let Ok(count) = std::str::from_utf8(&first) else {
        let lossy = String::from_utf8_lossy(&first);
        return Err(InputError::InvalidCount(lossy.trim().to_owned()).into());
    };

    let count = count.trim();
    // usize::from_str would also take a leading '+'
    if count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::InvalidCount(count.to_owned()).into());
    }

    count
        .parse::<usize>()
        .map_err(|_| InputError::InvalidCount(count.to_owned()).into())
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
