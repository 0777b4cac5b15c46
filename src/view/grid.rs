//! Day grid widget.
//!
//! Renders the weekday header and the fixed 6x7 day grid of the page month,
//! with an optional ISO week-number column on the left.

use super::constants::{CELL_WIDTH, COMPACT_CELL_WIDTH, WEEKDAY_HEADER_HEIGHT, WEEK_NUMBER_WIDTH};
use super::styles::PanelStyles;
use crate::model::date_math::{month_grid, same_month, week_start, GRID_COLUMNS, GRID_ROWS};
use crate::state::{CalendarPanel, ComposedPanel};
use chrono::{Datelike, NaiveDate, Weekday};
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use unicode_width::UnicodeWidthStr;

/// Width of one day cell for the given density.
pub fn cell_width(compact: bool) -> u16 {
    if compact {
        COMPACT_CELL_WIDTH
    } else {
        CELL_WIDTH
    }
}

/// Rows per week: a second row holds custom cell content.
///
/// Custom content is only shown in the regular (non-compact) density.
pub fn row_height(compact: bool, has_cell_renderer: bool) -> u16 {
    if !compact && has_cell_renderer {
        2
    } else {
        1
    }
}

/// Total width of the grid including the week-number column.
pub fn grid_width(composed: &ComposedPanel) -> u16 {
    let week_numbers = if composed.grid.show_week_numbers {
        WEEK_NUMBER_WIDTH
    } else {
        0
    };
    cell_width(composed.is_compact()) * GRID_COLUMNS as u16 + week_numbers
}

/// Total height of the grid including the weekday header.
pub fn grid_height(composed: &ComposedPanel, has_cell_renderer: bool) -> u16 {
    WEEKDAY_HEADER_HEIGHT
        + row_height(composed.is_compact(), has_cell_renderer) * GRID_ROWS as u16
}

/// Style for one day cell.
///
/// Layers are applied in order: base (page month or neighbouring month),
/// today, current value, cursor.
pub fn day_style(
    date: NaiveDate,
    composed: &ComposedPanel,
    today: NaiveDate,
    cursor: NaiveDate,
    styles: &PanelStyles,
) -> Style {
    let mut style = if same_month(date, composed.page_date) {
        styles.day
    } else {
        styles.outside_month
    };
    if date == today {
        style = style.patch(styles.today);
    }
    if date == composed.page_date {
        style = style.patch(styles.selected);
    }
    if date == cursor {
        style = style.patch(styles.cursor);
    }
    style
}

/// Right-align `text` in `width` display columns.
///
/// Pads by display width so double-width labels (e.g. CJK) stay aligned.
fn align_right(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", " ".repeat(padding), text)
}

/// Weekdays in column order.
pub fn weekday_columns(iso_week: bool) -> [Weekday; GRID_COLUMNS] {
    let mut weekday = week_start(iso_week);
    let mut columns = [weekday; GRID_COLUMNS];
    for column in columns.iter_mut() {
        *column = weekday;
        weekday = weekday.succ();
    }
    columns
}

/// The day grid of a calendar panel.
pub struct CalendarGrid<'a> {
    panel: &'a CalendarPanel,
    composed: &'a ComposedPanel,
    cursor: NaiveDate,
    styles: &'a PanelStyles,
}

impl<'a> CalendarGrid<'a> {
    /// Create a grid for the composed panel with the cursor on `cursor`.
    pub fn new(
        panel: &'a CalendarPanel,
        composed: &'a ComposedPanel,
        cursor: NaiveDate,
        styles: &'a PanelStyles,
    ) -> Self {
        Self {
            panel,
            composed,
            cursor,
            styles,
        }
    }

    fn render_header(&self, area: Rect, cell: u16, buf: &mut Buffer) {
        if self.composed.grid.show_week_numbers {
            let label = format!("{:>w$}", "Wk", w = (WEEK_NUMBER_WIDTH - 1) as usize);
            buf.set_stringn(area.x, area.y, label, WEEK_NUMBER_WIDTH as usize, self.styles.muted);
        }
        let origin = area.x + self.week_number_offset();
        for (index, weekday) in weekday_columns(self.composed.iso_week).iter().enumerate() {
            let cell_x = origin + index as u16 * cell;
            if cell_x >= area.right() {
                break;
            }
            let label = self.composed.locale.weekday_label(*weekday);
            let text = align_right(label, (cell - 1) as usize);
            let y = area.y;
            buf.set_stringn(cell_x, y, text, (cell - 1) as usize, self.styles.weekday);
        }
    }

    fn week_number_offset(&self) -> u16 {
        if self.composed.grid.show_week_numbers {
            WEEK_NUMBER_WIDTH
        } else {
            0
        }
    }
}

impl Widget for CalendarGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let compact = self.composed.is_compact();
        let cell = cell_width(compact);
        let row_h = row_height(compact, self.panel.has_cell_renderer());
        let today = self.panel.today();

        self.render_header(area, cell, buf);

        let origin = area.x + self.week_number_offset();
        let grid = month_grid(self.composed.page_date, self.composed.iso_week);
        for (row_index, row) in grid.iter().enumerate() {
            let y = area.y + WEEKDAY_HEADER_HEIGHT + row_index as u16 * row_h;
            if y >= area.bottom() {
                break;
            }

            if self.composed.grid.show_week_numbers {
                let thursday = row
                    .iter()
                    .find(|d| d.weekday() == Weekday::Thu)
                    .unwrap_or(&row[0]);
                let text = format!(
                    "{:>w$}",
                    thursday.iso_week().week(),
                    w = (WEEK_NUMBER_WIDTH - 1) as usize
                );
                buf.set_stringn(area.x, y, text, WEEK_NUMBER_WIDTH as usize, self.styles.muted);
            }

            for (column, date) in row.iter().enumerate() {
                let x = origin + column as u16 * cell;
                if x >= area.right() {
                    break;
                }
                let style = day_style(*date, self.composed, today, self.cursor, self.styles);
                let text = format!("{:>w$}", date.day(), w = (cell - 1) as usize);
                buf.set_stringn(x, y, text, (cell - 1) as usize, style);

                if row_h > 1 && y + 1 < area.bottom() {
                    if let Some(content) = self.panel.render_cell(*date) {
                        buf.set_stringn(x, y + 1, content, (cell - 1) as usize, self.styles.muted);
                    }
                }
            }
        }
    }
}
