//! Calendar panel widget.
//!
//! Lays out the title bar, the day grid (or the month dropdown while it is
//! open) and the toolbar with the "Today" button, inside an optional border.

use super::constants::{HEADER_HEIGHT, TOOLBAR_HEIGHT};
use super::grid::{grid_height, grid_width, CalendarGrid};
use super::month_dropdown::{dropdown_height, dropdown_width, MonthDropdown};
use super::styles::PanelStyles;
use crate::state::{CalendarPanel, CalendarState, ComposedPanel, GridState};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Widget},
};

/// Gap between the "Today" button and the cursor date in the toolbar.
const TOOLBAR_GAP: &str = "  ";

/// Title bar text, e.g. `"‹ January 2024 ▾ ›"`.
pub fn title_line(composed: &ComposedPanel, styles: &PanelStyles) -> Line<'static> {
    let indicator = if composed.calendar_state == Some(CalendarState::DropMonth) {
        " ▴"
    } else {
        " ▾"
    };
    Line::from(vec![
        Span::raw("‹ "),
        Span::styled(composed.title.clone(), styles.title),
        Span::raw(indicator),
        Span::raw(" ›"),
    ])
    .centered()
}

/// Toolbar text: the "Today" button followed by the highlighted date.
fn toolbar_line(composed: &ComposedPanel, grid: &GridState, styles: &PanelStyles) -> Line<'static> {
    let highlighted = match composed.calendar_state {
        Some(CalendarState::DropMonth) => composed
            .locale
            .month_pattern()
            .format(grid.dropdown_selection(composed.page_date)),
        None => composed.format.format(grid.cursor),
    };
    Line::from(vec![
        Span::styled(format!("[{}]", composed.today_label), styles.toolbar_button),
        Span::raw(TOOLBAR_GAP),
        Span::styled(highlighted, styles.muted),
    ])
}

/// Size `(width, height)` the panel needs to show everything.
pub fn desired_size(panel: &CalendarPanel, grid: &GridState) -> (u16, u16) {
    let composed = panel.compose();
    let styles = PanelStyles::default();

    let content_width = [
        grid_width(&composed),
        dropdown_width(),
        title_line(&composed, &styles).width() as u16,
        toolbar_line(&composed, grid, &styles).width() as u16,
    ]
    .into_iter()
    .max()
    .unwrap_or_default();

    let body_height = grid_height(&composed, panel.has_cell_renderer()).max(dropdown_height());
    let content_height = HEADER_HEIGHT + body_height + TOOLBAR_HEIGHT;

    let border = if composed.is_bordered() { 2 } else { 0 };
    (content_width + border, content_height + border)
}

/// Horizontally center a block of `width` columns inside `area`.
fn center_horizontally(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// The full calendar panel.
pub struct PanelView<'a> {
    panel: &'a CalendarPanel,
    grid: &'a GridState,
    styles: &'a PanelStyles,
}

impl<'a> PanelView<'a> {
    /// Create a view of `panel` with the keyboard state in `grid`.
    pub fn new(panel: &'a CalendarPanel, grid: &'a GridState, styles: &'a PanelStyles) -> Self {
        Self {
            panel,
            grid,
            styles,
        }
    }
}

impl Widget for PanelView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let composed = self.panel.compose();

        let inner = if composed.is_bordered() {
            let block = Block::bordered().border_style(self.styles.border);
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let [header, body, toolbar] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(TOOLBAR_HEIGHT),
        ])
        .areas(inner);

        title_line(&composed, self.styles).render(header, buf);

        match composed.calendar_state {
            Some(CalendarState::DropMonth) => {
                let area = center_horizontally(body, dropdown_width());
                MonthDropdown::new(&composed, self.grid.dropdown_cursor, self.styles)
                    .render(area, buf);
            }
            None => {
                let area = center_horizontally(body, grid_width(&composed));
                CalendarGrid::new(self.panel, &composed, self.grid.cursor, self.styles)
                    .render(area, buf);
            }
        }

        let toolbar_text = toolbar_line(&composed, self.grid, self.styles);
        let toolbar_area = center_horizontally(toolbar, toolbar_text.width() as u16);
        toolbar_text.render(toolbar_area, buf);
    }
}
