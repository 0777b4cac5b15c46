//! Keyboard action handler for the calendar panel.
//!
//! Translates domain-level [`KeyAction`]s into panel operations and grid
//! cursor movement. The handler mirrors what the grid component does with
//! its own affordances: paging calls `navigate_month`, the month dropdown
//! calls `select_page_date`, picking a cell calls `select_date`.

use crate::model::date_math;
use crate::model::KeyAction;
use crate::state::AppState;
use chrono::NaiveDate;
use tracing::debug;

/// What the caller should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Keep running.
    Continue,
    /// A day cell was picked.
    Picked(NaiveDate),
    /// The user asked to exit without picking.
    Quit,
}

/// Handle a keyboard action against the application state.
///
/// # Arguments
/// * `state` - Application state to mutate
/// * `action` - The action to apply
///
/// Returns whether the application should continue, finish with a picked
/// date, or quit.
pub fn handle_panel_action(state: &mut AppState, action: KeyAction) -> ActionOutcome {
    if state.help_visible {
        return handle_help_action(state, action);
    }

    match action {
        KeyAction::Help => {
            state.help_visible = true;
            state.help_scroll = 0;
        }
        KeyAction::Quit => {
            if state.panel.is_dropdown_open() {
                state.panel.toggle_month_dropdown();
            } else {
                return ActionOutcome::Quit;
            }
        }
        KeyAction::ToggleMonthDropdown => {
            state.panel.toggle_month_dropdown();
            state.sync_grid();
        }
        KeyAction::Today => {
            state.panel.go_to_today();
            state.sync_grid();
        }
        KeyAction::PrevMonth => {
            state.panel.prev_month();
            state.sync_grid();
        }
        KeyAction::NextMonth => {
            state.panel.next_month();
            state.sync_grid();
        }
        KeyAction::CursorLeft
        | KeyAction::CursorRight
        | KeyAction::CursorUp
        | KeyAction::CursorDown => {
            if state.panel.is_dropdown_open() {
                move_dropdown_cursor(state, action);
            } else {
                move_day_cursor(state, action);
            }
        }
        KeyAction::Confirm => {
            if state.panel.is_dropdown_open() {
                let page_date = state.grid.dropdown_selection(state.panel.current_value());
                state.panel.select_page_date(page_date);
                state.sync_grid();
            } else {
                let picked = state.grid.cursor;
                state.panel.select_date(picked);
                state.sync_grid();
                return ActionOutcome::Picked(picked);
            }
        }
    }

    ActionOutcome::Continue
}

fn handle_help_action(state: &mut AppState, action: KeyAction) -> ActionOutcome {
    match action {
        KeyAction::Help | KeyAction::Quit => {
            state.help_visible = false;
            state.help_scroll = 0;
        }
        KeyAction::CursorUp => {
            state.help_scroll = state.help_scroll.saturating_sub(1);
        }
        KeyAction::CursorDown => {
            state.help_scroll = state.help_scroll.saturating_add(1);
        }
        _ => {}
    }
    ActionOutcome::Continue
}

fn move_day_cursor(state: &mut AppState, action: KeyAction) {
    let days = match action {
        KeyAction::CursorLeft => -1,
        KeyAction::CursorRight => 1,
        KeyAction::CursorUp => -7,
        KeyAction::CursorDown => 7,
        _ => return,
    };
    let cursor = state.grid.move_cursor(days);

    // Leaving the displayed month pages the grid along with the cursor.
    if !date_math::same_month(cursor, state.panel.current_value()) {
        debug!(%cursor, "cursor left page month");
        state.panel.navigate_month(cursor);
        if !date_math::same_month(cursor, state.panel.current_value()) {
            // Controlled panels may refuse to page; snap back.
            state.sync_grid();
        }
    }
}

fn move_dropdown_cursor(state: &mut AppState, action: KeyAction) {
    let months = match action {
        KeyAction::CursorLeft => -1,
        KeyAction::CursorRight => 1,
        KeyAction::CursorUp => -12,
        KeyAction::CursorDown => 12,
        _ => return,
    };
    let today = state.panel.today();
    let limit = state.panel.props().grid.limit_end_year;
    state.grid.move_dropdown(months, today, limit);
}

#[cfg(test)]
#[path = "action_handler_tests.rs"]
mod tests;
