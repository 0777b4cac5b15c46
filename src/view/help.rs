//! Help overlay rendering.
//!
//! Displays a modal popup listing the calendar's keyboard shortcuts,
//! grouped by category.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the help overlay as a centered modal popup.
///
/// # Arguments
/// * `frame` - The ratatui frame to render into
/// * `scroll_offset` - Vertical scroll offset for the help content
pub fn render_help_overlay(frame: &mut Frame, scroll_offset: u16) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content())
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left)
        .scroll((scroll_offset, 0));

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        super::styles::MUTED_TEXT.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate a centered rectangle with given percentage of the parent area.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Build the help content lines grouped by category.
fn build_help_content() -> Vec<Line<'static>> {
    const SECTIONS: &[(&str, &[(&str, &str)])] = &[
        (
            "Days",
            &[
                ("h/←", "Previous day"),
                ("l/→", "Next day"),
                ("k/↑", "Previous week"),
                ("j/↓", "Next week"),
                ("Enter/Space", "Select day"),
            ],
        ),
        (
            "Months",
            &[
                ("[/PgUp", "Previous month"),
                ("]/PgDn", "Next month"),
                ("m", "Toggle month dropdown"),
                ("t/Home", "Go to today"),
            ],
        ),
        (
            "Month dropdown",
            &[
                ("h/l", "Previous/next month"),
                ("k/j", "Previous/next year"),
                ("Enter", "Show month"),
                ("Esc", "Close dropdown"),
            ],
        ),
        (
            "General",
            &[
                ("?", "Toggle this help"),
                ("q/Esc", "Quit without selecting"),
                ("Ctrl+C", "Quit immediately"),
            ],
        ),
    ];

    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(Color::White);

    let mut lines = Vec::new();
    for (index, (category, shortcuts)) in SECTIONS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![Span::styled(
            *category,
            super::styles::SECTION_HEADER,
        )]));
        for (key, description) in shortcuts.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<12}"), key_style),
                Span::styled(*description, desc_style),
            ]));
        }
    }
    lines
}
