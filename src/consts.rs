/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Month number for September
pub const SEPTEMBER: u8 = 9;

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
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Number of days in a week
pub const DAYS_PER_WEEK: u8 = 7;

/// English weekday names, indexed by day-of-week (0 = Sunday)
pub const WEEKDAY_NAMES: [&str; DAYS_PER_WEEK as usize] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// English month names (index 0 is January)
pub const MONTH_NAMES: [&str; MAX_MONTH as usize] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Length of a month abbreviation ("Jan", "Feb", ...)
pub(crate) const MONTH_ABBREV_LEN: usize = 3;

/// Per-month weekday offsets for Sakamoto's method (index 0 is January).
/// Years are counted from March so the leap day falls at the end of the year.
pub(crate) const MONTH_WEEKDAY_OFFSETS: [u8; MAX_MONTH as usize] =
    [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Month-first format separator (US format)
pub const MONTH_FIRST_SEPARATOR: char = '/';
/// Optional separator after the day or month in textual dates
pub const TEXT_SEPARATOR: char = ',';
