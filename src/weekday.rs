use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{DAYS_PER_WEEK, WEEKDAY_NAMES};

/// A day of the week. The discriminant is the day-of-week index,
/// counted from Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// All weekdays in index order.
    pub const ALL: [Self; DAYS_PER_WEEK as usize] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Maps any index onto a weekday, reducing it modulo 7.
    pub const fn from_index(index: u8) -> Self {
        Self::ALL[(index % DAYS_PER_WEEK) as usize]
    }

    /// Day-of-week index in `0..=6`, Sunday first.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// English name, read from the fixed weekday table.
    pub const fn name(self) -> &'static str {
        WEEKDAY_NAMES[self.index() as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_and_name_line_up() {
        for (i, day) in Weekday::ALL.iter().enumerate() {
            assert_eq!(day.index() as usize, i);
            assert_eq!(day.name(), WEEKDAY_NAMES[i]);
        }
        assert_eq!(Weekday::Sunday.name(), "Sunday");
        assert_eq!(Weekday::Saturday.name(), "Saturday");
    }

    #[test]
    fn test_from_index_wraps() {
        assert_eq!(Weekday::from_index(0), Weekday::Sunday);
        assert_eq!(Weekday::from_index(6), Weekday::Saturday);
        assert_eq!(Weekday::from_index(7), Weekday::Sunday);
        assert_eq!(Weekday::from_index(255), Weekday::from_index(255 % 7));
    }

    #[test]
    fn test_display() {
        assert_eq!(Weekday::Thursday.to_string(), "Thursday");
    }

    #[test]
    fn test_serde_uses_name() {
        let json = serde_json::to_string(&Weekday::Wednesday).unwrap();
        assert_eq!(json, r#""Wednesday""#);
        let parsed: Weekday = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Weekday::Wednesday);

        let result: Result<Weekday, _> = serde_json::from_str(r#""Funday""#);
        assert!(result.is_err());
    }
}
