//! Calendar panel (calpanel)
//!
//! A calendar panel that wraps a month grid with a "Today" button and a
//! month/year dropdown, plus a terminal date picker built on it.
//!
//! The library follows a Pure Core / Impure Shell split: `model` and `state`
//! hold the panel logic and never touch the terminal; `view` renders it with
//! ratatui and owns the event loop.

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
