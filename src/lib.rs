//! Decoder for Sri Lankan National Identity Card (NIC) numbers.
//!
//! A NIC carries its holder's birth year, a day-of-year code and, folded into
//! that code, the holder's gender. Two layouts are in circulation:
//!
//! - old: `YYDDDSSSSV`, ten characters, two-digit year
//! - new: `YYYYDDDSSSSC`, twelve digits, full year
//!
//! ```
//! use lka_nic::{decode, FormatKind, Gender};
//!
//! let record = decode("912680444V").unwrap();
//! assert_eq!(record.format_kind(), FormatKind::Old);
//! assert_eq!(record.gender(), Gender::Male);
//! assert_eq!(record.birth_date().to_string(), "1991-09-24");
//! ```
//!
//! Use [`is_valid`] to pre-filter input without handling errors. The individual
//! pipeline stages ([`parse_base`], [`normalize_day_code`], [`to_date`]) are
//! public for callers that need only part of the decode.

mod consts;
mod date;
mod decoder;
mod parse;
mod prelude;
mod types;

pub use consts::*;
pub use date::{BirthDate, RangeError, to_date};
pub use decoder::{
    DecodeError, Decoder, Gender, NicRecord, decode, decode_with_offset, normalize_day_code,
};
pub use parse::{FormatError, FormatKind, is_valid, parse_base, resolve_century};
pub use types::{Day, Month, Year, days_in_month, days_in_year, is_leap_year};
