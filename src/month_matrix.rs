use crate::consts::{DAYS_PER_WEEK, MATRIX_CELLS, MAX_BENGALI_DAY};
use serde::Serialize;

/// One slot of the 6x7 month grid.
///
/// `day` is 0 for a filler slot with no known day number; `in_month`
/// distinguishes the viewed month's days from previous/next-month
/// overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatrixCell {
    pub day: u8,
    pub in_month: bool,
}

/// Builds a 6x7 calendar matrix in row-major order, weeks starting Sunday.
///
/// Leading cells hold the trailing days of the previous month when its
/// length is known, otherwise zero-day fillers; trailing cells count up
/// from 1 as next-month overflow. Inputs are sanitized rather than
/// rejected: `days_in_month` is clamped to 1..=32, `first_day_of_week` to
/// 0..=6, and a supplied `prev_month_days` to 1..=32.
pub fn build_month_matrix(
    days_in_month: u8,
    first_day_of_week: u8,
    prev_month_days: Option<u8>,
) -> [MatrixCell; MATRIX_CELLS] {
    let days_in_month = days_in_month.clamp(1, MAX_BENGALI_DAY);
    let leading = usize::from(first_day_of_week.min(DAYS_PER_WEEK as u8 - 1));
    let prev_month_days = prev_month_days.map(|d| d.clamp(1, MAX_BENGALI_DAY));

    let mut cells = [MatrixCell::default(); MATRIX_CELLS];

    for (slot, cell) in cells.iter_mut().enumerate().take(leading) {
        let day = prev_month_days.map_or(0, |prev| {
            let day = i32::from(prev) - leading as i32 + 1 + slot as i32;
            if day >= 1 { day as u8 } else { 0 }
        });
        *cell = MatrixCell {
            day,
            in_month: false,
        };
    }

    for day in 1..=days_in_month {
        cells[leading + usize::from(day) - 1] = MatrixCell {
            day,
            in_month: true,
        };
    }

    let mut next_day = 1u8;
    for cell in cells
        .iter_mut()
        .skip(leading + usize::from(days_in_month))
    {
        *cell = MatrixCell {
            day: next_day,
            in_month: false,
        };
        next_day += 1;
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_42_cells() {
        let cells = build_month_matrix(31, 3, Some(30));
        assert_eq!(cells.len(), 42);
    }

    #[test]
    fn test_leading_cells_from_previous_month() {
        let cells = build_month_matrix(31, 3, Some(30));
        assert_eq!(cells[0], MatrixCell { day: 28, in_month: false });
        assert_eq!(cells[1], MatrixCell { day: 29, in_month: false });
        assert_eq!(cells[2], MatrixCell { day: 30, in_month: false });
        assert_eq!(cells[3], MatrixCell { day: 1, in_month: true });
    }

    #[test]
    fn test_leading_fillers_without_prev_month() {
        let cells = build_month_matrix(31, 3, None);
        assert_eq!(cells[0], MatrixCell { day: 0, in_month: false });
        assert_eq!(cells[2], MatrixCell { day: 0, in_month: false });
        assert_eq!(cells[3], MatrixCell { day: 1, in_month: true });
    }

    #[test]
    fn test_trailing_cells_count_from_one() {
        let cells = build_month_matrix(30, 0, Some(31));
        assert_eq!(cells[0], MatrixCell { day: 1, in_month: true });
        assert_eq!(cells[29], MatrixCell { day: 30, in_month: true });
        assert_eq!(cells[30], MatrixCell { day: 1, in_month: false });
        assert_eq!(cells[41], MatrixCell { day: 12, in_month: false });
    }

    #[test]
    fn test_in_month_cell_count() {
        for days in [29u8, 30, 31, 32] {
            for fdow in 0u8..7 {
                let cells = build_month_matrix(days, fdow, Some(30));
                let in_month = cells.iter().filter(|c| c.in_month).count();
                assert_eq!(in_month, usize::from(days));
            }
        }
    }

    #[test]
    fn test_inputs_are_sanitized() {
        // Out-of-range weekday clamps to Saturday
        let cells = build_month_matrix(30, 9, Some(30));
        assert_eq!(cells[6], MatrixCell { day: 30, in_month: false });
        assert_eq!(cells[7].day, 1);

        // Zero-day month clamps to one day
        let cells = build_month_matrix(0, 0, None);
        assert_eq!(cells[0], MatrixCell { day: 1, in_month: true });
        assert_eq!(cells[1], MatrixCell { day: 1, in_month: false });

        // Oversized values clamp to the 32-day ceiling
        let cells = build_month_matrix(200, 0, Some(200));
        let in_month = cells.iter().filter(|c| c.in_month).count();
        assert_eq!(in_month, 32);
    }

    #[test]
    fn test_full_grid_week_rows() {
        let cells = build_month_matrix(32, 6, Some(32));
        // Saturday start: leading cells are prev days 27..=32
        assert_eq!(cells[0].day, 27);
        assert_eq!(cells[5].day, 32);
        assert_eq!(cells[6], MatrixCell { day: 1, in_month: true });
        // 6 + 32 = 38 in-month cells end at index 37
        assert_eq!(cells[37], MatrixCell { day: 32, in_month: true });
        assert_eq!(cells[38], MatrixCell { day: 1, in_month: false });
    }
}
