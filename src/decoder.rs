use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{DAY_CODE_SLACK, DEFAULT_DAY_OFFSET, FEMALE_DAY_CODE_OFFSET, MAX_DAYS_IN_YEAR};
use crate::{BirthDate, FormatError, FormatKind, RangeError, parse_base, prelude::*, to_date};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum Gender {
    #[display(fmt = "Male")]
    Male,
    #[display(fmt = "Female")]
    Female,
}

/// Splits a raw day code into the holder's gender and the day code proper.
///
/// Female holders carry `FEMALE_DAY_CODE_OFFSET` on top of the day code.
/// No range checking happens here.
pub const fn normalize_day_code(raw_day_code: u16) -> (Gender, u16) {
    if raw_day_code > FEMALE_DAY_CODE_OFFSET {
        (Gender::Female, raw_day_code - FEMALE_DAY_CODE_OFFSET)
    } else {
        (Gender::Male, raw_day_code)
    }
}

/// Everything a NIC says about its holder. Only produced by a successful decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[display(
    fmt = "NicRecord(format_kind={format_kind}, gender={gender}, birth_year={birth_year}, \
           raw_day_code={raw_day_code}, day_code={day_code}, birth_date={birth_date})"
)]
pub struct NicRecord {
    format_kind:  FormatKind,
    gender:       Gender,
    birth_year:   u16,
    raw_day_code: u16,
    day_code:     u16,
    birth_date:   BirthDate,
}

impl NicRecord {
    pub const fn format_kind(&self) -> FormatKind {
        self.format_kind
    }

    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Year as encoded on the card (after century resolution for old numbers)
    pub const fn birth_year(&self) -> u16 {
        self.birth_year
    }

    /// Day code exactly as printed, including the female offset
    pub const fn raw_day_code(&self) -> u16 {
        self.raw_day_code
    }

    /// Day code with the female offset removed
    pub const fn day_code(&self) -> u16 {
        self.day_code
    }

    pub const fn birth_date(&self) -> BirthDate {
        self.birth_date
    }
}

/// Error type for a full decode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The text is not shaped like a NIC.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The day code cannot be a day of the year, even allowing for offset drift.
    #[error("NIC day code out of expected range: {day_code} exceeds maximum {max}")]
    DayCodeRange { day_code: u16, max: i64 },

    /// The date the day code points at does not exist.
    #[error(transparent)]
    Range(#[from] RangeError),
}

/// Decode settings.
///
/// Deserializes from a partial config; missing fields keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Decoder {
    /// Days subtracted from the day code before resolving the date
    pub day_offset: i32,
}

impl Default for Decoder {
    fn default() -> Self {
        Self {
            day_offset: DEFAULT_DAY_OFFSET,
        }
    }
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_day_offset(day_offset: i32) -> Self {
        Self { day_offset }
    }

    /// Largest day code accepted under this decoder's offset.
    pub fn max_day_code(&self) -> i64 {
        i64::from(MAX_DAYS_IN_YEAR) + i64::from(self.day_offset) + i64::from(DAY_CODE_SLACK)
    }

    /// Decodes a NIC into a [`NicRecord`].
    ///
    /// # Errors
    /// - `DecodeError::Format` if the text is not a 10 or 12 character NIC
    /// - `DecodeError::DayCodeRange` if the day code exceeds [`Self::max_day_code`]
    /// - `DecodeError::Range` if the resolved date does not exist
    pub fn decode(&self, text: &str) -> Result<NicRecord, DecodeError> {
        let (format_kind, birth_year, raw_day_code) = parse_base(text)?;
        let (gender, day_code) = normalize_day_code(raw_day_code);
        tracing::trace!(%format_kind, birth_year, raw_day_code, %gender, day_code, "parsed NIC");

        let max = self.max_day_code();
        if i64::from(day_code) > max {
            tracing::debug!(day_code, max, "rejecting NIC day code");
            return Err(DecodeError::DayCodeRange { day_code, max });
        }

        let birth_date = to_date(birth_year, day_code, self.day_offset)?;
        let record = NicRecord {
            format_kind,
            gender,
            birth_year,
            raw_day_code,
            day_code,
            birth_date,
        };
        tracing::debug!(%record, "decoded NIC");
        Ok(record)
    }
}

/// Decodes a NIC with [`DEFAULT_DAY_OFFSET`].
///
/// # Errors
/// See [`Decoder::decode`].
pub fn decode(text: &str) -> Result<NicRecord, DecodeError> {
    Decoder::default().decode(text)
}

/// Decodes a NIC with a caller-chosen day offset.
///
/// # Errors
/// See [`Decoder::decode`].
pub fn decode_with_offset(text: &str, offset: i32) -> Result<NicRecord, DecodeError> {
    Decoder::with_day_offset(offset).decode(text)
}

impl FromStr for NicRecord {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}
