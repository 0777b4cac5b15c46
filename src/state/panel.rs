//! Calendar panel state machine.
//!
//! [`CalendarPanel`] owns the transient UI state that drives the calendar
//! grid: the current page date and whether the month dropdown is open. It
//! forwards user interactions to caller-supplied callbacks and composes the
//! display snapshot ([`ComposedPanel`]) the renderer consumes.
//!
//! The value may be *controlled* (supplied by the caller, always wins) or
//! *uncontrolled* (owned by the panel). Reads go through
//! [`CalendarPanel::current_value`] only.

use crate::model::date_math;
use crate::model::{Clock, DatePattern, PanelLocale, SystemClock, GRID_DAY_PATTERN};
use chrono::NaiveDate;
use std::fmt;
use tracing::debug;

/// Class prefix applied when the caller does not supply one.
pub const DEFAULT_CLASS_PREFIX: &str = "calendar";

/// Callback receiving a date chosen by the user.
pub type DateCallback = Box<dyn FnMut(NaiveDate)>;

/// Cell content override: extra text rendered inside a day cell.
pub type CellRenderer = Box<dyn Fn(NaiveDate) -> Option<String>>;

/// Where the panel's value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelValue {
    /// The caller owns the value; internal state is ignored on reads.
    Controlled(NaiveDate),
    /// The panel owns the value.
    #[default]
    Uncontrolled,
}

impl From<Option<NaiveDate>> for PanelValue {
    fn from(value: Option<NaiveDate>) -> Self {
        match value {
            Some(date) => PanelValue::Controlled(date),
            None => PanelValue::Uncontrolled,
        }
    }
}

/// Options passed through to the calendar grid untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOptions {
    /// How many years past the current one the month dropdown offers.
    pub limit_end_year: u32,
    /// Render an ISO week-number column in front of each row.
    pub show_week_numbers: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            limit_end_year: 1000,
            show_week_numbers: false,
        }
    }
}

/// Static configuration of a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelProps {
    /// Controlled value, if any.
    pub value: PanelValue,
    /// Initial internal value; `None` means "today" at construction.
    pub default_value: Option<NaiveDate>,
    /// Start weeks on Monday instead of Sunday.
    pub iso_week: bool,
    /// Compact cells (single row, no custom cell content).
    pub compact: bool,
    /// Draw a border around the panel.
    pub bordered: bool,
    /// Localized labels and patterns.
    pub locale: PanelLocale,
    /// Prefix for generated class names.
    pub class_prefix: String,
    /// Extra caller class name.
    pub class_name: Option<String>,
    /// Grid pass-through options.
    pub grid: GridOptions,
}

impl Default for PanelProps {
    fn default() -> Self {
        Self {
            value: PanelValue::Uncontrolled,
            default_value: None,
            iso_week: false,
            compact: false,
            bordered: false,
            locale: PanelLocale::default(),
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            class_name: None,
            grid: GridOptions::default(),
        }
    }
}

/// Optional caller hooks.
///
/// All hooks are optional; an absent hook is simply not invoked.
#[derive(Default)]
pub struct PanelCallbacks {
    /// Called whenever the panel value changes.
    pub on_change: Option<DateCallback>,
    /// Called when a day cell is picked, before `on_change`.
    pub on_select: Option<DateCallback>,
    /// Extra content for a day cell.
    pub render_cell: Option<CellRenderer>,
}

impl PanelCallbacks {
    /// Set the change hook.
    pub fn on_change(mut self, f: impl FnMut(NaiveDate) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Set the select hook.
    pub fn on_select(mut self, f: impl FnMut(NaiveDate) + 'static) -> Self {
        self.on_select = Some(Box::new(f));
        self
    }

    /// Set the cell content override.
    pub fn render_cell(mut self, f: impl Fn(NaiveDate) -> Option<String> + 'static) -> Self {
        self.render_cell = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for PanelCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelCallbacks")
            .field("on_change", &self.on_change.is_some())
            .field("on_select", &self.on_select.is_some())
            .field("render_cell", &self.render_cell.is_some())
            .finish()
    }
}

/// Mutable state owned by a panel instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelState {
    /// Internally tracked value (ignored while controlled).
    pub current_value: NaiveDate,
    /// Whether the month/year dropdown is shown instead of the day grid.
    pub is_dropdown_open: bool,
}

/// Grid display mode requested by the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarState {
    /// The month/year dropdown replaces the day grid.
    DropMonth,
}

/// Ordered list of class names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    /// Append a class; empty names are skipped, repeats are kept.
    pub fn push(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !class.is_empty() {
            self.0.push(class);
        }
    }

    /// Whether the list contains `class`.
    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    /// Iterate the classes in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// Join a class prefix and a name as `{prefix}-{name}`.
///
/// Returns an empty string when either side is empty.
pub fn prefixed(prefix: &str, name: &str) -> String {
    if prefix.is_empty() || name.is_empty() {
        String::new()
    } else {
        format!("{prefix}-{name}")
    }
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPanel {
    /// Composed class list.
    pub classes: ClassList,
    /// Class prefix, for resolving `{prefix}-bordered` etc.
    pub class_prefix: String,
    /// Title shown above the grid.
    pub title: String,
    /// Label of the "Today" toolbar button.
    pub today_label: String,
    /// The month displayed by the grid.
    pub page_date: NaiveDate,
    /// Dropdown mode, if open.
    pub calendar_state: Option<CalendarState>,
    /// Week starts on Monday.
    pub iso_week: bool,
    /// Per-day pattern handed to the grid.
    pub format: DatePattern,
    /// Locale for grid labels.
    pub locale: PanelLocale,
    /// Forwarded grid options.
    pub grid: GridOptions,
}

impl ComposedPanel {
    /// Whether the composed classes carry the `{prefix}-{flag}` class.
    pub fn has_flag(&self, flag: &str) -> bool {
        let class = prefixed(&self.class_prefix, flag);
        !class.is_empty() && self.classes.contains(&class)
    }

    /// Whether the panel is drawn with a border.
    pub fn is_bordered(&self) -> bool {
        self.has_flag("bordered")
    }

    /// Whether the grid uses compact cells.
    pub fn is_compact(&self) -> bool {
        self.has_flag("compact")
    }
}

/// A calendar panel: value bookkeeping, dropdown toggle and callbacks.
///
/// # Examples
///
/// ```
/// use calpanel::model::FixedClock;
/// use calpanel::state::{CalendarPanel, PanelCallbacks, PanelProps};
/// use chrono::NaiveDate;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let jan = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let feb = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
///
/// let props = PanelProps { default_value: Some(jan), ..Default::default() };
/// let callbacks = PanelCallbacks::default().on_change(move |d| sink.borrow_mut().push(d));
/// let mut panel = CalendarPanel::with_clock(props, callbacks, Box::new(FixedClock(jan)));
///
/// panel.navigate_month(feb);
/// assert_eq!(panel.current_value(), feb);
/// assert_eq!(*seen.borrow(), vec![feb]);
/// ```
#[derive(Debug)]
pub struct CalendarPanel {
    props: PanelProps,
    callbacks: PanelCallbacks,
    state: PanelState,
    clock: Box<dyn Clock>,
}

impl CalendarPanel {
    /// Create a panel reading "today" from the system clock.
    pub fn new(props: PanelProps, callbacks: PanelCallbacks) -> Self {
        Self::with_clock(props, callbacks, Box::new(SystemClock))
    }

    /// Create a panel with an explicit clock.
    ///
    /// The internal value starts at `default_value`, or today when absent,
    /// and the dropdown starts closed.
    pub fn with_clock(mut props: PanelProps, callbacks: PanelCallbacks, clock: Box<dyn Clock>) -> Self {
        props.locale = props.locale.validated();
        let current_value = props.default_value.unwrap_or_else(|| clock.today());
        Self {
            props,
            callbacks,
            state: PanelState {
                current_value,
                is_dropdown_open: false,
            },
            clock,
        }
    }

    /// The value the grid displays: the controlled value if present,
    /// otherwise the internal one.
    pub fn current_value(&self) -> NaiveDate {
        match self.props.value {
            PanelValue::Controlled(date) => date,
            PanelValue::Uncontrolled => self.state.current_value,
        }
    }

    /// Whether the month dropdown is open.
    pub fn is_dropdown_open(&self) -> bool {
        self.state.is_dropdown_open
    }

    /// Today according to the panel's clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Panel configuration.
    pub fn props(&self) -> &PanelProps {
        &self.props
    }

    /// Internal state (the internal value may be shadowed by a controlled one).
    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// Replace the controlled value; `None` hands ownership back to the panel.
    pub fn set_value(&mut self, value: Option<NaiveDate>) {
        self.props.value = value.into();
    }

    /// Flip the dropdown open/closed.
    pub fn toggle_month_dropdown(&mut self) {
        self.state.is_dropdown_open = !self.state.is_dropdown_open;
        debug!(open = self.state.is_dropdown_open, "month dropdown toggled");
    }

    /// A month was picked in the dropdown.
    pub fn select_page_date(&mut self, date: NaiveDate) {
        debug!(%date, "page date selected");
        self.state.current_value = date;
        self.state.is_dropdown_open = false;
        self.emit_change(date);
    }

    /// The "Today" button was pressed.
    pub fn go_to_today(&mut self) {
        let today = self.clock.today();
        debug!(%today, "jump to today");
        self.state.current_value = today;
        self.state.is_dropdown_open = false;
        self.emit_change(today);
    }

    /// The grid paged to `date` (forward or backward). Leaves the dropdown alone.
    pub fn navigate_month(&mut self, date: NaiveDate) {
        debug!(%date, "month navigated");
        self.state.current_value = date;
        self.emit_change(date);
    }

    /// Page forward one month from the current value.
    pub fn next_month(&mut self) {
        let date = date_math::add_months(self.current_value(), 1);
        self.navigate_month(date);
    }

    /// Page backward one month from the current value.
    pub fn prev_month(&mut self) {
        let date = date_math::add_months(self.current_value(), -1);
        self.navigate_month(date);
    }

    /// A day cell was picked. Fires `on_select` then `on_change`.
    pub fn select_date(&mut self, date: NaiveDate) {
        debug!(%date, "date selected");
        self.state.current_value = date;
        if let Some(on_select) = self.callbacks.on_select.as_mut() {
            on_select(date);
        }
        self.emit_change(date);
    }

    /// `{prefix}-panel`, the caller class, then the flag classes.
    pub fn class_names(&self) -> ClassList {
        let prefix = &self.props.class_prefix;
        let mut classes = ClassList::default();
        classes.push(prefixed(prefix, "panel"));
        if let Some(class_name) = &self.props.class_name {
            classes.push(class_name.clone());
        }
        if self.props.bordered {
            classes.push(prefixed(prefix, "bordered"));
        }
        if self.props.compact {
            classes.push(prefixed(prefix, "compact"));
        }
        classes
    }

    /// Title for the current page, e.g. `"January 2024"`.
    pub fn title(&self) -> String {
        self.props.locale.month_pattern().format(self.current_value())
    }

    /// Label of the "Today" button.
    pub fn today_label(&self) -> &str {
        self.props.locale.today_label()
    }

    /// Custom content for a day cell, if a renderer was supplied.
    pub fn render_cell(&self, date: NaiveDate) -> Option<String> {
        self.callbacks.render_cell.as_ref().and_then(|render| render(date))
    }

    /// Whether a custom cell renderer was supplied.
    pub fn has_cell_renderer(&self) -> bool {
        self.callbacks.render_cell.is_some()
    }

    /// Snapshot of everything the renderer needs.
    pub fn compose(&self) -> ComposedPanel {
        ComposedPanel {
            classes: self.class_names(),
            class_prefix: self.props.class_prefix.clone(),
            title: self.title(),
            today_label: self.today_label().to_string(),
            page_date: self.current_value(),
            calendar_state: self
                .state
                .is_dropdown_open
                .then_some(CalendarState::DropMonth),
            iso_week: self.props.iso_week,
            format: DatePattern::parse(GRID_DAY_PATTERN),
            locale: self.props.locale.clone(),
            grid: self.props.grid,
        }
    }

    fn emit_change(&mut self, date: NaiveDate) {
        if let Some(on_change) = self.callbacks.on_change.as_mut() {
            on_change(date);
        }
    }
}

#[cfg(test)]
#[path = "panel_tests.rs"]
mod tests;
