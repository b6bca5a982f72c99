use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR,
};
use crate::RangeError;
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A calendar year guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `RangeError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, RangeError> {
        let non_zero = NonZeroU16::new(value).ok_or(RangeError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(RangeError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }

    /// Number of days in this year (365 or 366)
    pub const fn days(self) -> u16 {
        days_in_year(self.get())
    }

    /// The following year, or `None` past `MAX_YEAR`
    pub fn succ(self) -> Option<Self> {
        Self::new(self.get().checked_add(1)?).ok()
    }

    /// The preceding year, or `None` before year 1
    pub fn pred(self) -> Option<Self> {
        Self::new(self.get().checked_sub(1)?).ok()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.get())
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `RangeError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, RangeError> {
        let non_zero = NonZeroU8::new(value).ok_or(RangeError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(RangeError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// January, the month every day-of-year walk starts from
    pub const fn first() -> Self {
        Self(NonZeroU8::MIN)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Length of this month in the given year
    pub const fn days_in(self, year: Year) -> u8 {
        days_in_month(year.get(), self.get())
    }

    /// The following month within the same year, `None` after December
    pub fn next(self) -> Option<Self> {
        Self::new(self.get() + 1).ok()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.get())
    }
}

/// A day-of-month guaranteed to exist in the year and month it was built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the length of `month` in `year`
    ///
    /// # Errors
    /// Returns `RangeError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, RangeError> {
        let invalid = RangeError::InvalidDay {
            year: year.get(),
            month: month.get(),
            day: value,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if value > month.days_in(year) {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.get())
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_year(year: u16) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_limits() {
        assert!(matches!(Year::new(0), Err(RangeError::InvalidYear(0))));
        assert!(matches!(
            Year::new(10000),
            Err(RangeError::InvalidYear(10000))
        ));
        assert_eq!(Year::new(1).unwrap().get(), 1);
        assert_eq!(Year::new(9999).unwrap().get(), 9999);
    }

    #[test]
    fn test_year_succ_pred() {
        let y = Year::new(1991).unwrap();
        assert_eq!(y.succ().unwrap().get(), 1992);
        assert_eq!(y.pred().unwrap().get(), 1990);

        assert_eq!(Year::new(1).unwrap().pred(), None);
        assert_eq!(Year::new(9999).unwrap().succ(), None);
    }

    #[test]
    fn test_year_display_is_zero_padded() {
        assert_eq!(Year::new(1991).unwrap().to_string(), "1991");
        assert_eq!(Year::new(7).unwrap().to_string(), "0007");
    }

    #[test]
    fn test_components_keep_their_value() {
        let year = Year::new(2024).unwrap();
        let month = Month::new(2).unwrap();
        let day = Day::new(29, year, month).unwrap();
        assert_eq!((year.get(), month.get(), day.get()), (2024, 2, 29));
    }

    #[test]
    fn test_year_days() {
        assert_eq!(Year::new(1991).unwrap().days(), 365);
        assert_eq!(Year::new(1992).unwrap().days(), 366);
        assert!(Year::new(2000).unwrap().is_leap());
        assert!(!Year::new(1900).unwrap().is_leap());
    }

    #[test]
    fn test_month_limits() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
        assert!(matches!(Month::new(0), Err(RangeError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(RangeError::InvalidMonth(13))));
    }

    #[test]
    fn test_month_walk() {
        let mut month = Month::first();
        let mut seen = vec![month.get()];
        while let Some(next) = month.next() {
            seen.push(next.get());
            month = next;
        }
        assert_eq!(seen, (1..=12).collect::<Vec<u8>>());
    }

    #[test]
    fn test_month_display_is_zero_padded() {
        assert_eq!(Month::new(9).unwrap().to_string(), "09");
        assert_eq!(Month::new(12).unwrap().to_string(), "12");
    }

    #[test]
    fn test_day_respects_month_length() {
        let leap = Year::new(2024).unwrap();
        let common = Year::new(2023).unwrap();
        let feb = Month::new(2).unwrap();
        let apr = Month::new(4).unwrap();

        assert!(Day::new(29, leap, feb).is_ok());
        assert!(Day::new(29, common, feb).is_err());
        assert!(Day::new(30, leap, apr).is_ok());
        assert!(Day::new(31, leap, apr).is_err());

        let result = Day::new(0, leap, apr);
        assert!(matches!(
            result,
            Err(RangeError::InvalidDay {
                year: 2024,
                month: 4,
                day: 0
            })
        ));
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: u16,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 1992,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 1991,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description,
            );
        }
    }

    #[test]
    fn test_month_lengths_sum_to_year_length() {
        for year in [1900, 1991, 1992, 2000] {
            let total: u16 = (1..=12).map(|m| u16::from(days_in_month(year, m))).sum();
            assert_eq!(total, days_in_year(year), "year {year}");
        }
    }
}
