//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user interactions.

use crate::config::keybindings::KeyBindings;
use crate::model::FixedClock;
use crate::state::{ActionOutcome, AppState, CalendarPanel, PanelCallbacks, PanelProps};
use crate::view::{ColorConfig, PanelStyles, TuiApp, TuiError};
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Convert a ratatui buffer to a string representation.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed to keep assertions focused on content.
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests. Today is pinned with a [`FixedClock`].
pub struct PanelTestHarness {
    app: TuiApp<TestBackend>,
    outcome: ActionOutcome,
}

impl PanelTestHarness {
    /// Build a harness with default terminal size (80x24)
    ///
    /// # Arguments
    /// * `props` - Panel props under test
    /// * `callbacks` - Panel callbacks under test
    /// * `today` - The date the panel's clock reports
    pub fn new(
        props: PanelProps,
        callbacks: PanelCallbacks,
        today: NaiveDate,
    ) -> Result<Self, TuiError> {
        Self::with_size(props, callbacks, today, 80, 24)
    }

    /// Build a harness with custom terminal size
    pub fn with_size(
        props: PanelProps,
        callbacks: PanelCallbacks,
        today: NaiveDate,
        width: u16,
        height: u16,
    ) -> Result<Self, TuiError> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let panel = CalendarPanel::with_clock(props, callbacks, Box::new(FixedClock(today)));
        let app = TuiApp::new_for_test(
            terminal,
            AppState::new(panel),
            KeyBindings::default(),
            PanelStyles::with_color_config(ColorConfig::new(false)),
        );

        Ok(Self {
            app,
            outcome: ActionOutcome::Continue,
        })
    }

    /// Send a single key event
    ///
    /// Returns the outcome of the key. Once the app has finished (picked
    /// or quit), further keys are ignored and the final outcome is returned.
    pub fn send_key(&mut self, key: KeyCode) -> ActionOutcome {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> ActionOutcome {
        if self.outcome != ActionOutcome::Continue {
            return self.outcome;
        }

        self.outcome = self.app.handle_key_test(KeyEvent::new(key, mods));
        self.outcome
    }

    /// Send a sequence of keys
    ///
    /// Stops early when the app picks a date or quits.
    pub fn send_keys(&mut self, keys: &[KeyCode]) -> ActionOutcome {
        for key in keys {
            if self.send_key(*key) != ActionOutcome::Continue {
                break;
            }
        }
        self.outcome
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Whether the app is still running (no pick, no quit).
    pub fn is_running(&self) -> bool {
        self.outcome == ActionOutcome::Continue
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");

        let buffer = self.app.terminal().backend().buffer();
        buffer_to_string(buffer)
    }
}
