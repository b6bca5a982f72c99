/// Days subtracted from a NIC day code to land on the real birthday.
/// Observed on real cards; callers may override it per decode.
pub const DEFAULT_DAY_OFFSET: i32 = 2;

/// Length of a legacy NIC (`YYDDDSSSSV`)
pub const OLD_NIC_LEN: usize = 10;
/// Length of a current NIC (`YYYYDDDSSSSC`)
pub const NEW_NIC_LEN: usize = 12;

/// Leading characters of a legacy NIC that must be digits (year + day code)
pub const OLD_NIC_DIGIT_PREFIX: usize = 5;

/// Day codes above this value belong to female holders
pub const FEMALE_DAY_CODE_OFFSET: u16 = 500;

/// Two-digit legacy years up to and including this value are in the 2000s,
/// everything above is in the 1900s.
pub const CENTURY_PIVOT: u16 = 25;
/// Base year for legacy suffixes at or below `CENTURY_PIVOT`
pub const CENTURY_2000: u16 = 2000;
/// Base year for legacy suffixes above `CENTURY_PIVOT`
pub const CENTURY_1900: u16 = 1900;

/// Longest possible year
pub const MAX_DAYS_IN_YEAR: i32 = 366;
/// Extra tolerance on top of `MAX_DAYS_IN_YEAR + offset` before a day code is rejected
pub const DAY_CODE_SLACK: i32 = 5;

/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

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

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
