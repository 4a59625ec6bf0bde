use crate::BengaliDate;
use crate::consts::{BENGALI_MONTHS, CHOITRO, DEFAULT_MONTH_DAYS, MAX_BENGALI_DAY};
use crate::month_starts::MonthStartMapping;
use crate::prelude::*;
use crate::types::{
    GregorianDate, Location, bengali_days_in_month, bengali_month_lengths, bengali_month_start,
};
use serde::Serialize;

/// Derived description of one Bengali month for the calendar grid.
///
/// Recomputed on every navigation step; `today_day` is non-zero only when
/// the viewed month is the base date's own month (offset 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[display(fmt = "{} {}", month_name, year)]
pub struct MonthView {
    /// Bengali month index, 0..=11
    pub month: u8,
    /// Bengali year
    pub year: i32,
    /// Month name for the grid header
    pub month_name: &'static str,
    /// Day count of the viewed month, 1..=32
    pub days_in_month: u8,
    /// Weekday of day 1, 0=Sunday..6=Saturday
    pub first_day_of_week: u8,
    /// Day count of the previous month (leading grid cells)
    pub prev_month_days: u8,
    /// The base date's day, or 0 when paged away
    pub today_day: u8,
}

/// Computes the month view for `base` shifted by `offset` months.
///
/// `anchor` is the caller-supplied current Gregorian date; the table-driven
/// branch shifts it by `offset` calendar months to locate candidate mapping
/// years. Never fails: unresolvable mapping pieces degrade to 30-day
/// defaults.
pub fn compute_month_view(
    base: &BengaliDate,
    anchor: GregorianDate,
    location: Location,
    month_starts: Option<&MonthStartMapping>,
    offset: i32,
) -> MonthView {
    // Wrap the offset month into [0, 11], carrying whole years.
    let total = i64::from(base.month) + i64::from(offset);
    let month = total.rem_euclid(12) as u8;
    let year = base.year + total.div_euclid(12) as i32;

    let month_name = BENGALI_MONTHS[month as usize];
    let today_day = if offset == 0 { base.day } else { 0 };

    if location.uses_mapping() {
        table_view(month, year, month_name, today_day, anchor, offset, month_starts)
    } else {
        fixed_view(month, year, month_name, today_day)
    }
}

/// Bangladesh branch: everything reconstructed from the fixed tables.
fn fixed_view(month: u8, year: i32, month_name: &'static str, today_day: u8) -> MonthView {
    let days_in_month = bengali_month_lengths(year)[month as usize];
    let first_day_of_week = bengali_month_start(year, month).weekday();

    let prev_index = (month + 11) % 12;
    let prev_year = if month == 0 { year - 1 } else { year };
    let prev_month_days = bengali_days_in_month(prev_year, prev_index);

    MonthView {
        month,
        year,
        month_name,
        days_in_month,
        first_day_of_week,
        prev_month_days,
        today_day,
    }
}

/// West Bengal/India branch: Sankranti-to-Sankranti spans from the mapping.
fn table_view(
    month: u8,
    year: i32,
    month_name: &'static str,
    today_day: u8,
    anchor: GregorianDate,
    offset: i32,
    month_starts: Option<&MonthStartMapping>,
) -> MonthView {
    let shifted = anchor.add_months(offset);
    let best_effort = MonthView {
        month,
        year,
        month_name,
        days_in_month: DEFAULT_MONTH_DAYS,
        first_day_of_week: shifted.first_of_month().weekday(),
        prev_month_days: DEFAULT_MONTH_DAYS,
        today_day,
    };

    let Some(starts) = month_starts else {
        return best_effort;
    };
    let Some(mapping_year) = select_mapping_year(starts, month, shifted) else {
        return best_effort;
    };

    let month_start = starts.month_start(mapping_year, month);
    let next_start = if month == CHOITRO {
        starts.month_start(mapping_year + 1, 0)
    } else {
        starts.month_start(mapping_year, month + 1)
    };
    let (Some(month_start), Some(next_start)) = (month_start, next_start) else {
        return MonthView {
            first_day_of_week: 0,
            ..best_effort
        };
    };

    let days_in_month = clamp_span(month_start.days_until(next_start));
    // Day 1 is the day after the Sankranti date.
    let first_day_of_week = month_start.add_days(1).weekday();

    let prev_start = if month == 0 {
        starts.month_start(mapping_year - 1, CHOITRO)
    } else {
        starts.month_start(mapping_year, month - 1)
    };
    let prev_month_days =
        prev_start.map_or(DEFAULT_MONTH_DAYS, |prev| clamp_span(prev.days_until(month_start)));

    MonthView {
        days_in_month,
        first_day_of_week,
        prev_month_days,
        ..best_effort
    }
}

/// Picks the mapping year for the viewed month among the anchor's year and
/// its two neighbors: the candidate whose Sankranti is the latest one not
/// after the anchor wins. This matters for months spanning a Gregorian
/// year boundary, e.g. January dates of Poush belong to the previous
/// mapping year. Falls back to the first candidate holding any entry.
fn select_mapping_year(
    starts: &MonthStartMapping,
    month: u8,
    anchor: GregorianDate,
) -> Option<i32> {
    let candidates = [anchor.year, anchor.year - 1, anchor.year + 1];

    let mut chosen = None;
    let mut best_start: Option<GregorianDate> = None;
    for candidate in candidates {
        let Some(start) = starts.month_start(candidate, month) else {
            continue;
        };
        if start <= anchor && best_start.is_none_or(|best| start > best) {
            best_start = Some(start);
            chosen = Some(candidate);
        }
    }

    chosen.or_else(|| {
        candidates
            .into_iter()
            .find(|&candidate| starts.month_start(candidate, month).is_some())
    })
}

/// Sankranti-to-Sankranti day span, defaulting to 30 when degenerate and
/// clamped into the valid 1..=32 range.
fn clamp_span(raw: i64) -> u8 {
    if raw == 0 {
        DEFAULT_MONTH_DAYS
    } else {
        raw.clamp(1, i64::from(MAX_BENGALI_DAY)) as u8
    }
}
