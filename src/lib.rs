mod config;
mod consts;
mod driver;
mod prelude;
mod types;
mod weekday;

pub use config::{Config, ConfigError, DEFAULT_LOG_FILTER, LOG_FILTER_VAR, ON_ERROR_VAR};
pub use consts::*;
pub use driver::{ErrorPolicy, InputError, Report, RunError, run};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};
pub use weekday::Weekday;

use crate::prelude::*;
use std::str::FromStr;

/// A single day on the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}-{:02}-{:02}", "year", "month.get()", "day.get()")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateParseError {
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Date line is not valid UTF-8")]
    InvalidEncoding,
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Unknown month name: {_0}")]
    UnknownMonth(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
}

impl std::error::Error for DateParseError {}

/// Resolves a date string to the English name of its weekday.
///
/// ```
/// assert_eq!(weekday_names::day_name("July 4, 1776").unwrap(), "Thursday");
/// ```
///
/// # Errors
/// Returns `DateParseError` if `input` is not a date in one of the accepted
/// formats (see [`CalendarDate`]'s `FromStr` impl).
pub fn day_name(input: &str) -> Result<&'static str, DateParseError> {
    Ok(input.parse::<CalendarDate>()?.weekday().name())
}

impl CalendarDate {
    /// Builds a date from numeric components, validating each one.
    ///
    /// # Errors
    /// Returns the `DateParseError` for the first component out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    /// Day of the week this date falls on.
    ///
    /// Uses Sakamoto's method: January and February count as months of the
    /// previous year, so leap days are absorbed by the `y / 4 - y / 100 + y / 400`
    /// terms.
    pub fn weekday(&self) -> Weekday {
        let month = self.month.get();
        let year = u32::from(self.year.get()) - u32::from(month <= FEBRUARY);
        let offset = u32::from(MONTH_WEEKDAY_OFFSETS[usize::from(month - 1)]);
        let days = year + year / 4 - year / 100 + year / 400 + offset + u32::from(self.day.get());

        Weekday::ALL[(days % u32::from(DAYS_PER_WEEK)) as usize]
    }

    /// Day-of-week index in `0..=6`, Sunday first.
    pub fn weekday_index(&self) -> u8 {
        self.weekday().index()
    }
}

/// Accepted formats, after trimming surrounding whitespace:
///
/// - `January 1, 2023`, `Jan 1 2023`, `July 4th, 1776` (month name first)
/// - `4 July 1776`, `4 July, 1776` (day first)
/// - `2023-01-01` (ISO 8601)
/// - `01/01/2023` (US month-first)
///
/// Month names ignore case and may be abbreviated to three letters.
impl FromStr for CalendarDate {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateParseError::EmptyInput);
        }

        let has_hyphen = trimmed.contains(DATE_SEPARATOR);
        let has_slash = trimmed.contains(MONTH_FIRST_SEPARATOR);

        if has_hyphen && has_slash {
            return Err(DateParseError::InvalidFormat(format!(
                "Mixed delimiters ({DATE_SEPARATOR} and {MONTH_FIRST_SEPARATOR}) in {trimmed:?}"
            )));
        }

        if has_hyphen {
            Self::parse_iso(trimmed)
        } else if has_slash {
            Self::parse_month_first(trimmed)
        } else {
            Self::parse_textual(trimmed)
        }
    }
}

impl CalendarDate {
    /// Rejects anything but ASCII digits; `str::parse` would also take a '+'.
    fn digits(s: &str) -> Result<&str, DateParseError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateParseError::InvalidFormat(s.to_owned()));
        }
        Ok(s)
    }

    fn parse_u16(s: &str) -> Result<u16, DateParseError> {
        Self::digits(s)?
            .parse::<u16>()
            .map_err(|_| DateParseError::InvalidFormat(s.to_owned()))
    }

    fn parse_u8(s: &str) -> Result<u8, DateParseError> {
        Self::digits(s)?
            .parse::<u8>()
            .map_err(|_| DateParseError::InvalidFormat(s.to_owned()))
    }

    /// Splits on `separator` and requires exactly three components.
    fn split_three(s: &str, separator: char) -> Result<[&str; 3], DateParseError> {
        let parts: Vec<&str> = s.split(separator).map(str::trim).collect();
        <[&str; 3]>::try_from(parts).map_err(|parts| {
            DateParseError::InvalidFormat(format!(
                "Expected 2 {separator} separators, found {} in {s:?}",
                parts.len() - 1
            ))
        })
    }

    /// `YYYY-MM-DD`
    fn parse_iso(s: &str) -> Result<Self, DateParseError> {
        let [year, month, day] = Self::split_three(s, DATE_SEPARATOR)?;
        Self::new(
            Self::parse_u16(year)?,
            Self::parse_u8(month)?,
            Self::parse_u8(day)?,
        )
    }

    /// `MM/DD/YYYY`
    fn parse_month_first(s: &str) -> Result<Self, DateParseError> {
        let [month, day, year] = Self::split_three(s, MONTH_FIRST_SEPARATOR)?;
        Self::new(
            Self::parse_u16(year)?,
            Self::parse_u8(month)?,
            Self::parse_u8(day)?,
        )
    }

    /// `Month Day, Year` or `Day Month Year`, whitespace separated.
    /// At most one comma, attached to the end of the first or second token.
    fn parse_textual(s: &str) -> Result<Self, DateParseError> {
        let invalid = || DateParseError::InvalidFormat(s.to_owned());

        if s.matches(TEXT_SEPARATOR).count() > 1 {
            return Err(invalid());
        }

        let tokens: Vec<&str> = s.split_whitespace().collect();
        let [first, second, year] = <[&str; 3]>::try_from(tokens).map_err(|_| invalid())?;
        let first = first.strip_suffix(TEXT_SEPARATOR).unwrap_or(first);
        let second = second.strip_suffix(TEXT_SEPARATOR).unwrap_or(second);

        if [first, second, year]
            .iter()
            .any(|token| token.is_empty() || token.contains(TEXT_SEPARATOR))
        {
            return Err(invalid());
        }

        let (month, day) = if first.starts_with(|c: char| c.is_ascii_digit()) {
            (second, first)
        } else {
            (first, second)
        };

        let year = Year::new(Self::parse_u16(year)?)?;
        let month = Month::from_name(month)?;
        let day = Day::new(Self::parse_u8(strip_ordinal(day))?, year, month)?;

        Ok(Self { year, month, day })
    }
}

/// Drops an English ordinal suffix ("1st", "22nd", "3rd", "4th").
fn strip_ordinal(token: &str) -> &str {
    let split = token.len().saturating_sub(2);
    match token.split_at_checked(split) {
        Some((digits, suffix))
            if !digits.is_empty()
                && ["st", "nd", "rd", "th"]
                    .iter()
                    .any(|ordinal| suffix.eq_ignore_ascii_case(ordinal)) =>
        {
            digits
        }
        _ => token,
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
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
