//! Month/year dropdown widget.
//!
//! Replaces the day grid while open: a year heading followed by the twelve
//! months of that year, three per row.

use super::constants::{DROPDOWN_MONTHS_PER_ROW, DROPDOWN_MONTH_WIDTH};
use super::styles::PanelStyles;
use crate::model::date_math::with_year_month;
use crate::state::ComposedPanel;
use chrono::{Datelike, NaiveDate};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

/// Number of month rows below the year heading.
const MONTH_ROWS: u16 = 12 / DROPDOWN_MONTHS_PER_ROW;

/// Width of the dropdown in columns.
pub fn dropdown_width() -> u16 {
    DROPDOWN_MONTH_WIDTH * DROPDOWN_MONTHS_PER_ROW
}

/// Height of the dropdown in rows (year heading + month rows).
pub fn dropdown_height() -> u16 {
    1 + MONTH_ROWS
}

/// Abbreviated month name, e.g. `"Jan"`.
fn month_abbreviation(date: NaiveDate, month: u32) -> String {
    with_year_month(date, date.year(), month)
        .format("%b")
        .to_string()
}

/// The month/year dropdown of a calendar panel.
pub struct MonthDropdown<'a> {
    composed: &'a ComposedPanel,
    cursor: NaiveDate,
    styles: &'a PanelStyles,
}

impl<'a> MonthDropdown<'a> {
    /// Create a dropdown highlighting the month under `cursor`.
    pub fn new(composed: &'a ComposedPanel, cursor: NaiveDate, styles: &'a PanelStyles) -> Self {
        Self {
            composed,
            cursor,
            styles,
        }
    }
}

impl Widget for MonthDropdown<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let heading = Line::from(vec![
            Span::raw("‹ "),
            Span::styled(self.cursor.year().to_string(), self.styles.title),
            Span::raw(" ›"),
        ])
        .centered();
        heading.render(Rect { height: 1, ..area }, buf);

        let page = self.composed.page_date;
        for row in 0..MONTH_ROWS {
            let y = area.y + 1 + row;
            if y >= area.bottom() {
                break;
            }
            for column in 0..DROPDOWN_MONTHS_PER_ROW {
                let month = u32::from(row * DROPDOWN_MONTHS_PER_ROW + column + 1);
                let x = area.x + column * DROPDOWN_MONTH_WIDTH;
                if x >= area.right() {
                    break;
                }

                let mut style = self.styles.day;
                if page.year() == self.cursor.year() && page.month() == month {
                    style = style.patch(self.styles.selected);
                }
                if self.cursor.month() == month {
                    style = style.patch(self.styles.cursor);
                }

                let text = format!(" {} ", month_abbreviation(self.cursor, month));
                buf.set_stringn(x, y, text, DROPDOWN_MONTH_WIDTH as usize, style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FixedClock;
    use crate::state::{CalendarPanel, PanelCallbacks, PanelProps, PanelValue};
    use crate::test_harness::buffer_to_string;
    use crate::view::styles::ColorConfig;
    use ratatui::style::Modifier;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    fn composed(value: NaiveDate) -> ComposedPanel {
        let props = PanelProps {
            value: PanelValue::Controlled(value),
            ..PanelProps::default()
        };
        CalendarPanel::with_clock(
            props,
            PanelCallbacks::default(),
            Box::new(FixedClock(date(2024, 6, 10))),
        )
        .compose()
    }

    fn render(composed: &ComposedPanel, cursor: NaiveDate) -> Buffer {
        let styles = PanelStyles::with_color_config(ColorConfig::new(true));
        let area = Rect::new(0, 0, dropdown_width(), dropdown_height());
        let mut buf = Buffer::empty(area);
        MonthDropdown::new(composed, cursor, &styles).render(area, &mut buf);
        buf
    }

    #[test]
    fn month_abbreviations_are_three_letters() {
        let d = date(2024, 1, 31);
        assert_eq!(month_abbreviation(d, 1), "Jan");
        assert_eq!(month_abbreviation(d, 2), "Feb");
        assert_eq!(month_abbreviation(d, 12), "Dec");
    }

    #[test]
    fn lists_year_heading_and_twelve_months() {
        let composed = composed(date(2024, 3, 5));
        let text = buffer_to_string(&render(&composed, date(2024, 3, 5)));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("‹ 2024 ›"));
        assert_eq!(lines[1], " Jan  Feb  Mar");
        assert_eq!(lines[4], " Oct  Nov  Dec");
    }

    #[test]
    fn cursor_month_is_reversed() {
        let composed = composed(date(2024, 3, 5));
        let buf = render(&composed, date(2024, 5, 5));
        // May: second row, middle column.
        let cell = &buf[(DROPDOWN_MONTH_WIDTH + 1, 2)];
        assert_eq!(cell.symbol(), "M");
        assert!(cell.modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn page_month_highlighted_only_in_its_year() {
        let composed = composed(date(2024, 3, 5));
        let styles = PanelStyles::with_color_config(ColorConfig::new(true));
        let selected_bg = styles.selected.bg.unwrap_or_default();

        let same_year = render(&composed, date(2024, 1, 5));
        assert_eq!(same_year[(2 * DROPDOWN_MONTH_WIDTH + 1, 1)].bg, selected_bg);

        let other_year = render(&composed, date(2025, 1, 5));
        assert_ne!(other_year[(2 * DROPDOWN_MONTH_WIDTH + 1, 1)].bg, selected_bg);
    }
}
