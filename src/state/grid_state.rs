//! Cursor state owned by the calendar grid.
//!
//! The panel only tracks the page date; the grid additionally tracks which
//! day cell has keyboard focus and which month the dropdown highlights.

use crate::model::date_math;
use chrono::{Datelike, NaiveDate};

/// Keyboard cursor positions for the day grid and the month dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridState {
    /// Focused day cell.
    pub cursor: NaiveDate,
    /// Highlighted month in the dropdown (day is kept for clamping).
    pub dropdown_cursor: NaiveDate,
}

impl GridState {
    /// Both cursors start at `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            cursor: date,
            dropdown_cursor: date,
        }
    }

    /// Re-align both cursors with the panel value.
    pub fn sync_to(&mut self, date: NaiveDate) {
        self.cursor = date;
        self.dropdown_cursor = date;
    }

    /// Move the day cursor by `days` and return the new position.
    pub fn move_cursor(&mut self, days: i64) -> NaiveDate {
        self.cursor = date_math::add_days(self.cursor, days);
        self.cursor
    }

    /// Move the dropdown cursor by `months`, keeping its year inside the
    /// selectable range.
    ///
    /// A cursor that starts outside the range (a page value before 1900 or
    /// past the end year) is first pulled onto the nearest selectable year.
    pub fn move_dropdown(&mut self, months: i32, today: NaiveDate, limit_end_year: u32) {
        let start_year = self.dropdown_cursor.year();
        let in_range = date_math::clamp_dropdown_year(start_year, today, limit_end_year);
        if in_range != start_year {
            let cursor = self.dropdown_cursor;
            self.dropdown_cursor = date_math::with_year_month(cursor, in_range, cursor.month());
        }

        let moved = date_math::add_months(self.dropdown_cursor, months);
        let year = date_math::clamp_dropdown_year(moved.year(), today, limit_end_year);
        if year != moved.year() {
            // Out of range: stay put rather than snapping to a different month.
            return;
        }
        self.dropdown_cursor = moved;
    }

    /// Page date the dropdown would select, keeping `page_date`'s day.
    pub fn dropdown_selection(&self, page_date: NaiveDate) -> NaiveDate {
        date_math::with_year_month(
            page_date,
            self.dropdown_cursor.year(),
            self.dropdown_cursor.month(),
        )
    }
}
