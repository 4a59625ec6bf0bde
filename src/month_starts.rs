//! Sankranti month-start mapping, parsed once at the boundary.
//!
//! The external resource is JSON keyed by Gregorian year string, each value
//! a map of Bengali month index string ("0".."11") to a "YYYY-MM-DD" date.
//! The date recorded for a month is its Sankranti day: the last Gregorian
//! day still belonging to the previous Bengali month. Day 1 is the day
//! after.

use crate::consts::MONTHS_PER_YEAR;
use crate::types::GregorianDate;
use std::collections::BTreeMap;

/// Error type for loading the month-start mapping.
///
/// Only a structurally unusable document is an error; individual malformed
/// entries are skipped during the load. Callers treat any of these as
/// "mapping absent" and fall back to arithmetic strategies.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    /// The text is not valid JSON.
    #[error("Invalid month start JSON: {0}")]
    InvalidJson(String),

    /// The JSON root is not an object of year rows.
    #[error("Month start JSON must be an object keyed by year")]
    NotAnObject,

    /// The document is empty or whitespace.
    #[error("Empty month start document")]
    EmptyInput,
}

/// Strongly typed month-start lookup: Gregorian year to a fixed row of 12
/// optional Sankranti dates.
///
/// Read-only after loading; a missing entry means "mapping unavailable for
/// this month" and is never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthStartMapping {
    years: BTreeMap<i32, [Option<GregorianDate>; 12]>,
}

impl MonthStartMapping {
    /// Creates an empty mapping (every lookup misses).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the external JSON document.
    ///
    /// Entries with a non-numeric year key, a month key outside "0".."11",
    /// or an unparseable date string are skipped with a debug log; the rest
    /// of the document still loads.
    ///
    /// # Errors
    /// Returns `MappingError` only when the document as a whole is
    /// unusable (empty, invalid JSON, or a non-object root).
    pub fn from_json(text: &str) -> Result<Self, MappingError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(MappingError::EmptyInput);
        }

        let value: serde_json::Value = serde_json::from_str(trimmed)
            .map_err(|e| MappingError::InvalidJson(e.to_string()))?;
        let root = value.as_object().ok_or(MappingError::NotAnObject)?;

        let mut mapping = Self::new();
        for (year_key, row) in root {
            let Ok(year) = year_key.parse::<i32>() else {
                log::debug!("skipping non-numeric year key {year_key:?}");
                continue;
            };
            let Some(months) = row.as_object() else {
                log::debug!("skipping year {year}: row is not an object");
                continue;
            };
            for (month_key, entry) in months {
                let Ok(month) = month_key.parse::<u8>() else {
                    log::debug!("skipping month key {month_key:?} in year {year}");
                    continue;
                };
                if month >= MONTHS_PER_YEAR {
                    log::debug!("skipping out-of-range month {month} in year {year}");
                    continue;
                }
                let Some(date_str) = entry.as_str() else {
                    log::debug!("skipping month {month} in year {year}: not a string");
                    continue;
                };
                match date_str.parse::<GregorianDate>() {
                    Ok(date) => mapping.insert(year, month, date),
                    Err(err) => {
                        log::debug!("skipping month {month} in year {year}: {err}");
                    }
                }
            }
        }

        Ok(mapping)
    }

    /// Records the Sankranti date for one Bengali month of a mapping year.
    pub fn insert(&mut self, year: i32, month: u8, sankranti: GregorianDate) {
        debug_assert!(month < MONTHS_PER_YEAR);
        if month < MONTHS_PER_YEAR {
            self.years.entry(year).or_default()[month as usize] = Some(sankranti);
        }
    }

    /// The full 12-slot row for a mapping year, if any entry exists.
    pub fn year_row(&self, year: i32) -> Option<&[Option<GregorianDate>; 12]> {
        self.years.get(&year)
    }

    /// The Sankranti date for one month of a mapping year.
    pub fn month_start(&self, year: i32, month: u8) -> Option<GregorianDate> {
        if month >= MONTHS_PER_YEAR {
            return None;
        }
        self.years.get(&year)?[month as usize]
    }

    /// True when no entry loaded at all.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}
