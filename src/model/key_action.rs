//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Cursor movement
    /// Move the cursor one day back, or one month back in the dropdown. Default: h/←
    CursorLeft,
    /// Move the cursor one day forward, or one month forward in the dropdown. Default: l/→
    CursorRight,
    /// Move the cursor one week back, or one year back in the dropdown. Default: k/↑
    CursorUp,
    /// Move the cursor one week forward, or one year forward in the dropdown. Default: j/↓
    CursorDown,

    // Paging
    /// Show the previous month. Default: [/Page Up
    PrevMonth,
    /// Show the next month. Default: ]/Page Down
    NextMonth,

    // Toolbar
    /// Open or close the month/year dropdown. Default: m
    ToggleMonthDropdown,
    /// Jump to today. Default: t
    Today,

    // Selection
    /// Pick the date under the cursor, or the month under the dropdown cursor. Default: Enter/Space
    Confirm,

    // Application
    /// Toggle the help overlay. Default: ?
    Help,
    /// Exit without picking a date. Default: q/Esc
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_action_is_copy_and_hashable() {
        use std::collections::HashSet;

        let action = KeyAction::Today;
        let copied = action;
        let mut set = HashSet::new();
        set.insert(action);
        set.insert(copied);
        assert_eq!(set.len(), 1);
    }
}
