use crate::BengaliDate;
use crate::consts::BENGALI_DAYS;
use crate::numerals::format_number;
use serde::{Deserialize, Serialize};

/// Display layout for a Bengali date.
///
/// Settings strings convert leniently: any unrecognized value selects
/// `Full`, matching the default panel layout.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayFormat {
    /// `"{dayName}, {day} {monthName} {year}"`
    #[default]
    Full,
    /// `"{day} {monthName}"`
    Short,
    /// `"{day} {monthName} {year}"`
    DateOnly,
    /// `"{day}/{month+1}/{year}"`
    Compact,
}

impl From<&str> for DisplayFormat {
    fn from(s: &str) -> Self {
        match s {
            "short" => Self::Short,
            "date-only" => Self::DateOnly,
            "compact" => Self::Compact,
            _ => Self::Full,
        }
    }
}

/// Renders a Bengali date under the chosen layout. Every numeric
/// component individually passes through `format_number`.
pub fn format_bengali_date(
    date: &BengaliDate,
    day_name: &str,
    format: DisplayFormat,
    use_bengali_numerals: bool,
) -> String {
    let day = format_number(i64::from(date.day), use_bengali_numerals);
    let year = format_number(i64::from(date.year), use_bengali_numerals);

    match format {
        DisplayFormat::Short => format!("{day} {}", date.month_name()),
        DisplayFormat::DateOnly => format!("{day} {} {year}", date.month_name()),
        DisplayFormat::Compact => {
            let month = format_number(i64::from(date.month) + 1, use_bengali_numerals);
            format!("{day}/{month}/{year}")
        }
        DisplayFormat::Full => format!("{day_name}, {day} {} {year}", date.month_name()),
    }
}

/// Bengali weekday name for a 0=Sunday index; empty string out of range.
pub fn bengali_day_name(weekday: u8) -> &'static str {
    BENGALI_DAYS.get(weekday as usize).copied().unwrap_or("")
}
