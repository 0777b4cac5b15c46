//! Screen layout: the calendar panel centered above a status bar.

use super::constants::STATUS_BAR_HEIGHT;
use super::help::render_help_overlay;
use super::panel_view::{desired_size, PanelView};
use super::styles::PanelStyles;
use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Key hints shown in the status bar.
const STATUS_HINTS: &str = "←↓↑→ move | [ ] month | m months | t today | Enter select | ? help | q quit";

/// Render the complete screen for the given state.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &PanelStyles) {
    let [content_area, status_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(frame.area());

    let (width, height) = desired_size(&state.panel, &state.grid);
    let panel_area = centered(content_area, width, height);
    frame.render_widget(PanelView::new(&state.panel, &state.grid, styles), panel_area);

    render_status_bar(frame, status_area, styles);

    if state.help_visible {
        render_help_overlay(frame, state.help_scroll);
    }
}

/// Center a `width` x `height` box in `area`, clamped to the area.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, styles: &PanelStyles) {
    let paragraph = Paragraph::new(Line::from(STATUS_HINTS)).style(styles.muted);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_box_sits_in_the_middle() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered(area, 28, 9), Rect::new(26, 7, 28, 9));
    }

    #[test]
    fn centered_box_is_clamped_to_small_areas() {
        let area = Rect::new(0, 0, 20, 5);
        assert_eq!(centered(area, 28, 9), area);
    }
}
