//! Application state aggregate.

use super::grid_state::GridState;
use super::panel::CalendarPanel;

/// Everything the TUI mutates between frames.
#[derive(Debug)]
pub struct AppState {
    /// The calendar panel.
    pub panel: CalendarPanel,
    /// Grid and dropdown cursors.
    pub grid: GridState,
    /// Whether the help overlay is shown.
    pub help_visible: bool,
    /// First visible line of the help overlay.
    pub help_scroll: u16,
}

impl AppState {
    /// Wrap a panel; cursors start on its current value.
    pub fn new(panel: CalendarPanel) -> Self {
        let grid = GridState::new(panel.current_value());
        Self {
            panel,
            grid,
            help_visible: false,
            help_scroll: 0,
        }
    }

    /// Re-align the grid cursors with the panel value.
    pub fn sync_grid(&mut self) {
        self.grid.sync_to(self.panel.current_value());
    }
}
