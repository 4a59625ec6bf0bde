//! Gregorian to Bengali (Bongabdo) calendar conversion.
//!
//! The Bengali solar calendar runs roughly 593 years behind the Gregorian
//! one and starts its year on Pohela Boishakh in mid-April. Two regional
//! variants exist: Bangladesh uses a fixed revised calendar, while West
//! Bengal/India follows the Surya Siddhanta, where month transitions
//! (Sankranti) are astronomical events supplied here as a precomputed
//! [`MonthStartMapping`]. Conversion never fails: when mapping data is
//! absent or unusable it silently degrades to fixed arithmetic.

mod consts;
mod festivals;
mod format;
mod month_matrix;
mod month_starts;
mod month_view;
mod numerals;
mod prelude;
mod types;

pub use consts::*;
pub use festivals::{BENGALI_FESTIVALS, FestivalEntry, festivals_for};
pub use format::{DisplayFormat, bengali_day_name, format_bengali_date};
pub use month_matrix::{MatrixCell, build_month_matrix};
pub use month_starts::{MappingError, MonthStartMapping};
pub use month_view::{MonthView, compute_month_view};
pub use numerals::{format_number, map_digits, to_bengali_numerals};
pub use types::{
    GregorianDate, Location, ParseError, bengali_days_in_month, bengali_month_lengths,
    bengali_month_start, days_in_gregorian_month, is_bengali_leap_year, is_gregorian_leap_year,
    pohela_boishakh,
};

use serde::Serialize;
use std::fmt;

/// A date in the Bengali calendar.
///
/// `month` is a 0-based index into [`BENGALI_MONTHS`]; `day` stays within
/// 1..=32 (only Choitro reaches 32, in a leap configuration). Values are
/// created fresh on every conversion and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BengaliDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl BengaliDate {
    /// Creates a Bengali date from raw components.
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// The Bengali name of this date's month; empty for an out-of-range
    /// month index.
    pub fn month_name(&self) -> &'static str {
        BENGALI_MONTHS.get(self.month as usize).copied().unwrap_or("")
    }
}

impl fmt::Display for BengaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month_name(), self.year)
    }
}

/// Converts a Gregorian date to a Bengali date.
///
/// Strategies are tried in order: the table-driven Surya Siddhanta lookup
/// when a mapping is supplied, then fixed April-14 arithmetic. The result
/// is always structurally valid (month 0..=11, day 1..=32); degraded
/// mapping data falls through rather than failing.
pub fn gregorian_to_bengali(
    date: GregorianDate,
    month_starts: Option<&MonthStartMapping>,
) -> BengaliDate {
    if let Some(mapping) = month_starts {
        if let Some(result) = table_driven(date, mapping) {
            return result;
        }
        log::debug!("no usable month start entry for {date}, using fixed arithmetic");
    }
    fixed_calendar(date)
}

/// Location-aware conversion entry point.
///
/// `Bangladesh` always uses fixed arithmetic and never consults the
/// mapping; `WestBengal` and `India` run the full strategy chain.
pub fn bengali_for_location(
    date: GregorianDate,
    location: Location,
    month_starts: Option<&MonthStartMapping>,
) -> BengaliDate {
    if location.uses_mapping() {
        gregorian_to_bengali(date, month_starts)
    } else {
        fixed_calendar(date)
    }
}

/// Table-driven strategy: locates the Bengali month whose
/// Sankranti-to-Sankranti interval contains the date.
///
/// A mapped date is the Sankranti day itself, which still belongs to the
/// *previous* Bengali month/year (the transition happens later that day),
/// so day 1 is the Gregorian day after and every boundary comparison
/// against a Sankranti uses strict `>`.
fn table_driven(date: GregorianDate, starts: &MonthStartMapping) -> Option<BengaliDate> {
    let current_boishakh = starts.month_start(date.year, 0);
    let previous_boishakh = starts.month_start(date.year - 1, 0);

    let (bengali_year, mapping_year) = match (current_boishakh, previous_boishakh) {
        (Some(current), _) if date > current => (date.year - BENGALI_YEAR_OFFSET, date.year),
        (Some(_), Some(_)) => (date.year - 1 - BENGALI_YEAR_OFFSET, date.year - 1),
        // This Gregorian year's row is missing, but the previous Bengali
        // year spans into it: its row still covers dates before the
        // approximate new year.
        (None, Some(_)) if date < pohela_boishakh(date.year - BENGALI_YEAR_OFFSET) => {
            (date.year - 1 - BENGALI_YEAR_OFFSET, date.year - 1)
        }
        _ => return None,
    };

    let row = starts.year_row(mapping_year)?;

    let mut located = None;
    for month in 0..MONTHS_PER_YEAR {
        let Some(start) = row[month as usize] else {
            continue;
        };
        if month < CHOITRO {
            let Some(next) = row[month as usize + 1] else {
                continue;
            };
            if date > start && date <= next {
                located = Some((month, start, Some(next)));
                break;
            }
        } else if date > start {
            // Choitro's interval ends at the following year's Boishakh
            // Sankranti, which may be absent.
            located = Some((month, start, starts.month_start(mapping_year + 1, 0)));
            break;
        }
    }
    let (month, month_start, next_start) = located?;

    // Day 1 is the day after the Sankranti, so the whole-day delta is
    // already the 1-based day number.
    let day = month_start.days_until(date);
    let month_length = next_start.map_or_else(
        || i64::from(bengali_days_in_month(bengali_year, month)),
        |next| month_start.days_until(next),
    );
    let day = day
        .clamp(1, month_length.max(1))
        .min(i64::from(MAX_BENGALI_DAY)) as u8;

    Some(BengaliDate::new(bengali_year, month, day))
}

/// Fixed-arithmetic strategy (and heuristic fallback): Pohela Boishakh is
/// April 14, month lengths come from the fixed table, and Choitro gets 32
/// days in a Bengali leap year.
fn fixed_calendar(date: GregorianDate) -> BengaliDate {
    let new_year = pohela_boishakh(date.year - BENGALI_YEAR_OFFSET);
    let (bengali_year, year_start) = if date >= new_year {
        (date.year - BENGALI_YEAR_OFFSET, new_year)
    } else {
        let year = date.year - 1 - BENGALI_YEAR_OFFSET;
        (year, pohela_boishakh(year))
    };

    let lengths = bengali_month_lengths(bengali_year);
    let mut month = 0u8;
    let mut day = year_start.days_until(date) + 1;
    for (index, &length) in lengths.iter().enumerate() {
        if day <= i64::from(length) {
            month = index as u8;
            break;
        }
        day -= i64::from(length);
    }

    // A 366-day Gregorian interval over a 365-day Bengali year can step
    // past Choitro; the clamp keeps the result structurally valid.
    let day = day.clamp(1, i64::from(lengths[month as usize])) as u8;
    BengaliDate::new(bengali_year, month, day)
}
