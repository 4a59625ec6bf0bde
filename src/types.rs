use crate::consts::{
    BENGALI_YEAR_OFFSET, CENTURY_CYCLE, CHOITRO, CHOITRO_DAYS_LEAP, DATE_SEPARATOR, FEBRUARY,
    FEBRUARY_DAYS_LEAP, FIXED_MONTH_LENGTHS, GREGORIAN_CYCLE, GREGORIAN_MONTH_LENGTHS,
    LEAP_YEAR_CYCLE, MONTHS_PER_YEAR, NEW_YEAR_DAY, NEW_YEAR_MONTH,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Days between the civil epoch (0000-03-01) and 1970-01-01
const UNIX_EPOCH_SHIFT: i64 = 719_468;
/// Days in a full 400-year Gregorian cycle
const DAYS_PER_ERA: i64 = 146_097;

/// Error type for parsing date strings and calendar components.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The string does not look like "YYYY-MM-DD".
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Month component outside 1..=12.
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(u8),

    /// Day component invalid for the given year and month.
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },

    /// Empty date string.
    #[error("Empty date string")]
    EmptyInput,
}

/// A proleptic Gregorian civil date.
///
/// This is the input side of every conversion: callers are responsible for
/// supplying valid calendar components when using `new` directly; the
/// `FromStr` boundary validates. Ordering is plain chronological order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
#[serde(try_from = "String", into = "String")]
pub struct GregorianDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl GregorianDate {
    /// Creates a date from raw components. Not validated; use `FromStr`
    /// when the components come from external data.
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Days since 1970-01-01 (negative before the epoch).
    pub fn day_number(self) -> i64 {
        let y = i64::from(self.year) - i64::from(self.month <= FEBRUARY);
        let era = if y >= 0 { y } else { y - 399 } / 400;
        let yoe = y - era * 400;
        let mp = i64::from(if self.month > FEBRUARY {
            self.month - 3
        } else {
            self.month + 9
        });
        let doy = (153 * mp + 2) / 5 + i64::from(self.day) - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * DAYS_PER_ERA + doe - UNIX_EPOCH_SHIFT
    }

    /// Inverse of `day_number`.
    pub fn from_day_number(n: i64) -> Self {
        let z = n + UNIX_EPOCH_SHIFT;
        let era = if z >= 0 { z } else { z - (DAYS_PER_ERA - 1) } / DAYS_PER_ERA;
        let doe = z - era * DAYS_PER_ERA;
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / (DAYS_PER_ERA - 1)) / 365;
        let y = yoe + era * 400;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
        let month = if mp < 10 { mp + 3 } else { mp - 9 } as u8;
        let year = (y + i64::from(month <= FEBRUARY)) as i32;
        Self { year, month, day }
    }

    /// Day of week, 0 = Sunday .. 6 = Saturday.
    pub fn weekday(self) -> u8 {
        // 1970-01-01 was a Thursday.
        (self.day_number() + 4).rem_euclid(7) as u8
    }

    /// The date `n` whole days later (or earlier for negative `n`).
    pub fn add_days(self, n: i64) -> Self {
        Self::from_day_number(self.day_number() + n)
    }

    /// The date `n` calendar months later, clamping the day into the
    /// target month (Jan 31 + 1 month = Feb 28/29).
    pub fn add_months(self, n: i32) -> Self {
        let months =
            i64::from(self.year) * 12 + i64::from(self.month) - 1 + i64::from(n);
        let year = months.div_euclid(12) as i32;
        let month = (months.rem_euclid(12) + 1) as u8;
        let day = self.day.min(days_in_gregorian_month(year, month));
        Self { year, month, day }
    }

    /// Whole days from `self` to `other` (negative when `other` is earlier).
    pub fn days_until(self, other: Self) -> i64 {
        other.day_number() - self.day_number()
    }

    /// The first day of this date's Gregorian month.
    pub const fn first_of_month(self) -> Self {
        Self {
            year: self.year,
            month: self.month,
            day: 1,
        }
    }
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    /// Strictly parses `"YYYY-MM-DD"` as used by the month-start mapping.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        }

        let year: i32 = parts[0]
            .parse()
            .map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))?;
        let month: u8 = parts[1]
            .parse()
            .map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))?;
        let day: u8 = parts[2]
            .parse()
            .map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))?;

        if month == 0 || month > MONTHS_PER_YEAR {
            return Err(ParseError::InvalidMonth(month));
        }
        if day == 0 || day > days_in_gregorian_month(year, month) {
            return Err(ParseError::InvalidDay { year, month, day });
        }

        Ok(Self { year, month, day })
    }
}

impl TryFrom<String> for GregorianDate {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GregorianDate> for String {
    fn from(date: GregorianDate) -> Self {
        date.to_string()
    }
}

/// Calendar variant selector.
///
/// `WestBengal` and `India` both use the table-driven Surya Siddhanta
/// strategy; `Bangladesh` uses the fixed revised calendar and never
/// consults a month-start mapping.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Location {
    #[default]
    WestBengal,
    Bangladesh,
    India,
}

impl Location {
    /// Whether this variant consumes a month-start mapping.
    pub const fn uses_mapping(self) -> bool {
        !matches!(self, Self::Bangladesh)
    }
}

impl From<&str> for Location {
    /// Lenient settings-string conversion; unrecognized values select the
    /// default (`WestBengal`).
    fn from(s: &str) -> Self {
        match s {
            "bangladesh" => Self::Bangladesh,
            "india" => Self::India,
            _ => Self::WestBengal,
        }
    }
}

// Helper functions

pub const fn is_gregorian_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_gregorian_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MONTHS_PER_YEAR);

    if month == FEBRUARY && is_gregorian_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        GREGORIAN_MONTH_LENGTHS[month as usize]
    }
}

/// Leap rule for the fixed Bengali calendar: the proleptic Gregorian leap
/// rule applied to the Bengali year number.
pub const fn is_bengali_leap_year(year: i32) -> bool {
    is_gregorian_leap_year(year)
}

/// Fixed month lengths for a Bengali year (Choitro gets 32 days in a leap
/// year).
pub const fn bengali_month_lengths(year: i32) -> [u8; 12] {
    let mut lengths = FIXED_MONTH_LENGTHS;
    if is_bengali_leap_year(year) {
        lengths[CHOITRO as usize] = CHOITRO_DAYS_LEAP;
    }
    lengths
}

/// Fixed-calendar day count for one Bengali month.
pub const fn bengali_days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month < MONTHS_PER_YEAR);
    bengali_month_lengths(year)[month as usize]
}

/// Gregorian date of Pohela Boishakh (day 1 of month 0) for a Bengali year
/// under the fixed rule: always April 14 of `bengali_year + 593`.
pub fn pohela_boishakh(bengali_year: i32) -> GregorianDate {
    GregorianDate::new(
        bengali_year + BENGALI_YEAR_OFFSET,
        NEW_YEAR_MONTH,
        NEW_YEAR_DAY,
    )
}

/// Gregorian date of day 1 of the given Bengali month under the fixed
/// rule: Pohela Boishakh plus the cumulative lengths of preceding months.
pub fn bengali_month_start(bengali_year: i32, month: u8) -> GregorianDate {
    debug_assert!(month < MONTHS_PER_YEAR);
    let lengths = bengali_month_lengths(bengali_year);
    let offset: i64 = lengths[..month as usize]
        .iter()
        .map(|&len| i64::from(len))
        .sum();
    pohela_boishakh(bengali_year).add_days(offset)
}
