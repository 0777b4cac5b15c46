//! UI state machine (pure).
//!
//! All state transitions are plain method calls testable without a terminal.

pub mod action_handler;
pub mod app_state;
pub mod grid_state;
pub mod panel;

// Re-export for convenience
pub use action_handler::{handle_panel_action, ActionOutcome};
pub use app_state::AppState;
pub use grid_state::GridState;
pub use panel::{
    prefixed, CalendarPanel, CalendarState, CellRenderer, ClassList, ComposedPanel, DateCallback,
    GridOptions, PanelCallbacks, PanelProps, PanelState, PanelValue, DEFAULT_CLASS_PREFIX,
};
