//! Acceptance tests: paging months and jumping to today.

use crate::state::{PanelCallbacks, PanelProps, PanelValue};
use crate::test_harness::PanelTestHarness;
use chrono::NaiveDate;
use crossterm::event::KeyCode;
use std::cell::RefCell;
use std::rc::Rc;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

fn changes() -> (PanelCallbacks, Rc<RefCell<Vec<NaiveDate>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let callbacks = PanelCallbacks::default().on_change(move |d| sink.borrow_mut().push(d));
    (callbacks, log)
}

fn harness_on(value: NaiveDate) -> (PanelTestHarness, Rc<RefCell<Vec<NaiveDate>>>) {
    let (callbacks, log) = changes();
    let props = PanelProps {
        default_value: Some(value),
        ..PanelProps::default()
    };
    let harness = PanelTestHarness::new(props, callbacks, date(2024, 6, 10)).expect("harness");
    (harness, log)
}

#[test]
fn bracket_keys_page_months_and_report_changes() {
    let (mut harness, log) = harness_on(date(2024, 1, 31));

    harness.send_key(KeyCode::Char(']'));
    // Day is clamped to the end of February.
    assert_eq!(harness.state().panel.current_value(), date(2024, 2, 29));
    assert_eq!(harness.state().grid.cursor, date(2024, 2, 29));

    harness.send_key(KeyCode::Char('['));
    assert_eq!(harness.state().panel.current_value(), date(2024, 1, 29));

    assert_eq!(*log.borrow(), vec![date(2024, 2, 29), date(2024, 1, 29)]);
    assert!(harness.is_running());
}

#[test]
fn page_keys_cross_year_boundaries() {
    let (mut harness, _) = harness_on(date(2024, 12, 15));
    harness.send_key(KeyCode::PageDown);
    assert_eq!(harness.state().panel.current_value(), date(2025, 1, 15));
    harness.send_keys(&[KeyCode::PageUp, KeyCode::PageUp]);
    assert_eq!(harness.state().panel.current_value(), date(2024, 11, 15));
}

#[test]
fn cursor_leaving_the_month_pages_the_grid() {
    let (mut harness, log) = harness_on(date(2024, 1, 31));

    harness.send_key(KeyCode::Right);

    assert_eq!(harness.state().grid.cursor, date(2024, 2, 1));
    assert_eq!(harness.state().panel.current_value(), date(2024, 2, 1));
    assert_eq!(*log.borrow(), vec![date(2024, 2, 1)]);
}

#[test]
fn cursor_inside_the_month_does_not_report_changes() {
    let (mut harness, log) = harness_on(date(2024, 1, 15));
    harness.send_keys(&[KeyCode::Char('l'), KeyCode::Char('j'), KeyCode::Char('h')]);
    assert_eq!(harness.state().grid.cursor, date(2024, 1, 22));
    assert_eq!(harness.state().panel.current_value(), date(2024, 1, 15));
    assert!(log.borrow().is_empty());
}

#[test]
fn controlled_panel_snaps_cursor_back() {
    let (callbacks, log) = changes();
    let props = PanelProps {
        value: PanelValue::Controlled(date(2024, 1, 1)),
        ..PanelProps::default()
    };
    let mut harness = PanelTestHarness::new(props, callbacks, date(2024, 6, 10)).expect("harness");

    harness.send_key(KeyCode::Left);

    // The change is reported, but the controlled value does not move.
    assert_eq!(*log.borrow(), vec![date(2023, 12, 31)]);
    assert_eq!(harness.state().panel.current_value(), date(2024, 1, 1));
    assert_eq!(harness.state().grid.cursor, date(2024, 1, 1));
}

#[test]
fn t_jumps_to_today() {
    let (mut harness, log) = harness_on(date(2020, 3, 3));
    harness.send_key(KeyCode::Char('t'));
    assert_eq!(harness.state().panel.current_value(), date(2024, 6, 10));
    assert_eq!(harness.state().grid.cursor, date(2024, 6, 10));
    assert_eq!(*log.borrow(), vec![date(2024, 6, 10)]);
}

#[test]
fn home_jumps_to_today_and_closes_dropdown() {
    let (mut harness, _) = harness_on(date(2020, 3, 3));
    harness.send_key(KeyCode::Char('m'));
    assert!(harness.state().panel.is_dropdown_open());

    harness.send_key(KeyCode::Home);

    assert!(!harness.state().panel.is_dropdown_open());
    assert_eq!(harness.state().panel.current_value(), date(2024, 6, 10));
}
