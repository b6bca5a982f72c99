use serde::Serialize;

use crate::consts::{
    CENTURY_1900, CENTURY_2000, CENTURY_PIVOT, NEW_NIC_LEN, OLD_NIC_DIGIT_PREFIX, OLD_NIC_LEN,
};
use crate::prelude::*;

/// Which of the two NIC layouts a number uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum FormatKind {
    /// 10 characters: `YYDDDSSSSV`
    #[display(fmt = "Old NIC")]
    Old,
    /// 12 digits: `YYYYDDDSSSSC`
    #[display(fmt = "New NIC")]
    New,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum FormatError {
    #[display(fmt = "Invalid NIC length: {length}; expected 10 (old) or 12 (new)")]
    InvalidLength { length: usize },
    #[display(fmt = "Invalid old NIC: expected digits in positions 1-5: {_0}")]
    InvalidOld(String),
    #[display(fmt = "Invalid new NIC: expected 12 digits: {_0}")]
    InvalidNew(String),
}

impl std::error::Error for FormatError {}

/// Checks whether `text` has the shape of a NIC, without decoding it.
///
/// Old numbers need five leading digits followed by five alphanumerics, which
/// covers both the `V`/`X` suffixed and the all-digit forms. New numbers must
/// be twelve digits. Surrounding whitespace is ignored.
pub fn is_valid(text: &str) -> bool {
    let chars: Vec<char> = text.trim().chars().collect();
    match chars.len() {
        OLD_NIC_LEN => {
            let (head, tail) = chars.split_at(OLD_NIC_DIGIT_PREFIX);
            head.iter().all(char::is_ascii_digit) && tail.iter().all(char::is_ascii_alphanumeric)
        }
        NEW_NIC_LEN => chars.iter().all(char::is_ascii_digit),
        _ => false,
    }
}

/// Extracts `(format_kind, birth_year, raw_day_code)` from a NIC.
///
/// The year is not range-checked here; an impossible year surfaces when the
/// date is resolved.
///
/// # Errors
/// Returns `FormatError` if the trimmed text is not 10 or 12 characters long,
/// or if the digits the layout reads from are not digits.
pub fn parse_base(text: &str) -> Result<(FormatKind, u16, u16), FormatError> {
    let trimmed = text.trim();
    let chars: Vec<char> = trimmed.chars().collect();

    match chars.len() {
        OLD_NIC_LEN => {
            let invalid = || FormatError::InvalidOld(trimmed.to_owned());
            let suffix = parse_digits(&chars[0..2]).ok_or_else(invalid)?;
            let raw_day_code = parse_digits(&chars[2..5]).ok_or_else(invalid)?;
            Ok((FormatKind::Old, resolve_century(suffix), raw_day_code))
        }
        NEW_NIC_LEN => {
            if !chars.iter().all(char::is_ascii_digit) {
                return Err(FormatError::InvalidNew(trimmed.to_owned()));
            }
            let invalid = || FormatError::InvalidNew(trimmed.to_owned());
            let birth_year = parse_digits(&chars[0..4]).ok_or_else(invalid)?;
            let raw_day_code = parse_digits(&chars[4..7]).ok_or_else(invalid)?;
            Ok((FormatKind::New, birth_year, raw_day_code))
        }
        length => Err(FormatError::InvalidLength { length }),
    }
}

/// Maps a two-digit legacy year onto a full year, pivoting at `CENTURY_PIVOT`.
pub const fn resolve_century(suffix: u16) -> u16 {
    if suffix <= CENTURY_PIVOT {
        CENTURY_2000 + suffix
    } else {
        CENTURY_1900 + suffix
    }
}

// At most four ASCII digits, so the value always fits.
fn parse_digits(digits: &[char]) -> Option<u16> {
    digits.iter().try_fold(0u16, |acc, c| {
        let d = c.to_digit(10)?;
        acc.checked_mul(10)?.checked_add(u16::try_from(d).ok()?)
    })
}
