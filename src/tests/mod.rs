//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests drive the TUI with key events against a
//! TestBackend and a pinned clock.

mod acceptance_navigation;
