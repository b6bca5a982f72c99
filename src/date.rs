use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{DATE_SEPARATOR, Day, Month, Year, prelude::*};

/// A concrete calendar date. Every value names a day that exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}-{month}-{day}")]
pub struct BirthDate {
    year:  Year,
    month: Month,
    day:   Day,
}

/// Error type for calendar construction and date resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Year outside `1..=MAX_YEAR`.
    #[error("Invalid year: {0} (must be 1-{max})", max = crate::MAX_YEAR)]
    InvalidYear(u16),

    /// Month outside `1..=12`.
    #[error("Invalid month: {0} (must be 1-{max})", max = crate::MAX_MONTH)]
    InvalidMonth(u8),

    /// Day that does not exist in the given month.
    #[error("Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },

    /// Date text that is not `YYYY-MM-DD`.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// January 1 of `year` shifted by `days` does not land on a representable date.
    #[error("Computed date out of range: {days} days from {year:04}-01-01")]
    OutOfRange { year: u16, days: i64 },
}

impl BirthDate {
    /// Creates a date from raw components.
    ///
    /// # Errors
    /// Returns the `RangeError` of the first component that does not validate.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, RangeError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// 1-based day of the year (January 1 is 1).
    pub fn ordinal(&self) -> u16 {
        let mut before = 0u16;
        let mut month = Month::first();
        while month < self.month {
            before += u16::from(month.days_in(self.year));
            match month.next() {
                Some(next) => month = next,
                None => break,
            }
        }
        before + u16::from(self.day.get())
    }

    /// Walks `days` days forward (or backward when negative) from January 1
    /// of `year`. Returns `None` when the walk leaves `1..=MAX_YEAR`.
    fn from_new_year_offset(year: Year, days: i64) -> Option<Self> {
        let mut year = year;
        let mut remaining = days;

        while remaining < 0 {
            year = year.pred()?;
            remaining += i64::from(year.days());
        }
        while remaining >= i64::from(year.days()) {
            remaining -= i64::from(year.days());
            year = year.succ()?;
        }

        let mut month = Month::first();
        loop {
            let len = i64::from(month.days_in(year));
            if remaining < len {
                break;
            }
            remaining -= len;
            month = month.next()?;
        }

        let day = u8::try_from(remaining + 1).ok()?;
        let day = Day::new(day, year, month).ok()?;
        Some(Self { year, month, day })
    }
}

/// Resolves a gender-normalized day code to a calendar date.
///
/// January 1 of `birth_year` is day 0 and the result lies `day_code - offset`
/// days after it. The difference may be negative, which lands in the previous
/// year. Pass [`DEFAULT_DAY_OFFSET`](crate::DEFAULT_DAY_OFFSET) unless the
/// cards being decoded are known to follow a different convention.
///
/// # Errors
/// Returns `RangeError::OutOfRange` if `birth_year` or the resulting date falls
/// outside `1..=MAX_YEAR`.
pub fn to_date(birth_year: u16, day_code: u16, offset: i32) -> Result<BirthDate, RangeError> {
    let days = i64::from(day_code) - i64::from(offset);
    let out_of_range = || RangeError::OutOfRange {
        year: birth_year,
        days,
    };

    let start = Year::new(birth_year).map_err(|_| out_of_range())?;
    let date = BirthDate::from_new_year_offset(start, days).ok_or_else(out_of_range)?;
    tracing::trace!(birth_year, day_code, offset, %date, "resolved day code");
    Ok(date)
}

impl FromStr for BirthDate {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(RangeError::InvalidFormat(trimmed.to_owned()));
        };

        let invalid = |_| RangeError::InvalidFormat(trimmed.to_owned());
        let year = year.parse::<u16>().map_err(invalid)?;
        let month = month.parse::<u8>().map_err(invalid)?;
        let day = day.parse::<u8>().map_err(invalid)?;

        Self::new(year, month, day)
    }
}

impl Serialize for BirthDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BirthDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
