//! Month arithmetic and month-grid layout (pure).
//!
//! The grid is always 6 weeks x 7 days so the panel height does not jump
//! when paging between months with 4, 5 or 6 visible weeks.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

/// Number of week rows in a month grid.
pub const GRID_ROWS: usize = 6;

/// Number of day columns in a month grid.
pub const GRID_COLUMNS: usize = 7;

/// Earliest year offered by the month dropdown.
pub const MIN_DROPDOWN_YEAR: i32 = 1900;

/// A 6x7 block of consecutive dates covering one page month.
pub type MonthGrid = [[NaiveDate; GRID_COLUMNS]; GRID_ROWS];

/// Shift `date` by `delta` months, clamping the day to the target month's end.
///
/// Saturates at chrono's representable range instead of failing, so paging
/// past the end of time simply stops moving.
pub fn add_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let magnitude = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        date.checked_add_months(magnitude)
    } else {
        date.checked_sub_months(magnitude)
    };
    shifted.unwrap_or(date)
}

/// Shift `date` by `delta` days, saturating at chrono's range.
pub fn add_days(date: NaiveDate, delta: i64) -> NaiveDate {
    let magnitude = Days::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    };
    shifted.unwrap_or(date)
}

/// Number of days in the given month (1-12).
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = first.and_then(|d| d.checked_add_months(Months::new(1)));
    match (first, next) {
        (Some(first), Some(next)) => next.signed_duration_since(first).num_days() as u32,
        _ => 31,
    }
}

/// Move `date` into `year`/`month`, keeping the day where possible.
///
/// The day is clamped to the last day of the target month (Jan 31 -> Feb 29).
/// Returns `date` unchanged when the target month is not representable.
pub fn with_year_month(date: NaiveDate, year: i32, month: u32) -> NaiveDate {
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Whether two dates fall in the same calendar month.
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// First weekday of a grid row.
pub fn week_start(iso_week: bool) -> Weekday {
    if iso_week {
        Weekday::Mon
    } else {
        Weekday::Sun
    }
}

/// Column of `date` in a grid row starting on `week_start(iso_week)`.
pub fn weekday_column(date: NaiveDate, iso_week: bool) -> usize {
    let weekday = date.weekday();
    let column = if iso_week {
        weekday.num_days_from_monday()
    } else {
        weekday.num_days_from_sunday()
    };
    column as usize
}

/// Build the 6x7 grid of dates displayed for the month containing `page_date`.
///
/// Leading and trailing cells are filled with the neighbouring months' days.
pub fn month_grid(page_date: NaiveDate, iso_week: bool) -> MonthGrid {
    let first = first_of_month(page_date);
    let offset = weekday_column(first, iso_week) as i64;
    let origin = add_days(first, -offset);

    let mut grid = [[origin; GRID_COLUMNS]; GRID_ROWS];
    for (row, week) in grid.iter_mut().enumerate() {
        for (column, cell) in week.iter_mut().enumerate() {
            *cell = add_days(origin, (row * GRID_COLUMNS + column) as i64);
        }
    }
    grid
}

/// Clamp a year into the dropdown's selectable range.
pub fn clamp_dropdown_year(year: i32, today: NaiveDate, limit_end_year: u32) -> i32 {
    let max = today
        .year()
        .saturating_add(i32::try_from(limit_end_year).unwrap_or(i32::MAX));
    year.clamp(MIN_DROPDOWN_YEAR, max.max(MIN_DROPDOWN_YEAR))
}
