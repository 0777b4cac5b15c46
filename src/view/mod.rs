//! TUI rendering and terminal management (impure shell)

pub mod constants;
pub mod grid;
mod help;
mod layout;
pub mod month_dropdown;
pub mod panel_view;
pub mod styles;

pub use grid::CalendarGrid;
pub use help::render_help_overlay;
pub use month_dropdown::MonthDropdown;
pub use panel_view::PanelView;
pub use styles::{ColorConfig, PanelStyles};

use crate::config::keybindings::KeyBindings;
use crate::state::{handle_panel_action, ActionOutcome, AppState};
use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: PanelStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(app_state: AppState, styles: PanelStyles) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles,
        })
    }

    /// Run the main event loop
    ///
    /// Returns the picked date, or `None` when the user quits without
    /// picking one. Blocks on terminal events; nothing redraws while idle.
    pub fn run(&mut self) -> Result<Option<NaiveDate>, TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match self.handle_key(key) {
                    ActionOutcome::Continue => {}
                    ActionOutcome::Picked(date) => {
                        info!(%date, "date picked");
                        return Ok(Some(date));
                    }
                    ActionOutcome::Quit => {
                        info!("quit without picking a date");
                        return Ok(None);
                    }
                },
                Event::Resize(width, height) => {
                    debug!("Handling resize to {}x{}", width, height);
                }
                _ => continue,
            }
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Dispatch a key event through the bindings to the panel.
    fn handle_key(&mut self, key: KeyEvent) -> ActionOutcome {
        // Ctrl+C always quits, even with an overlay open
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return ActionOutcome::Quit;
        }

        match self.key_bindings.get(key) {
            Some(action) => {
                debug!(?action, "key action");
                handle_panel_action(&mut self.app_state, action)
            }
            None => ActionOutcome::Continue,
        }
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let app_state = &self.app_state;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, app_state, styles);
        })?;
        Ok(())
    }
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    ///
    /// This allows tests to construct TuiApp directly without going through
    /// terminal initialization. Used by acceptance test harness.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
        styles: PanelStyles,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            styles,
        }
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event (test-only accessor)
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> ActionOutcome {
        self.handle_key(key)
    }

    /// Render a single frame (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI for a prepared application state.
///
/// Handles terminal setup, the event loop and cleanup. The terminal is
/// restored even when the loop fails.
pub fn run_panel(app_state: AppState, styles: PanelStyles) -> Result<Option<NaiveDate>, TuiError> {
    let mut app = TuiApp::new(app_state, styles)?;

    let result = app.run();

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
