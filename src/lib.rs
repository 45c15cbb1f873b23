//! typeahead: a search-as-you-type widget for terminal UIs.
//!
//! - `kernel`: headless state machine (debounce, lookup lifecycle, highlighting)
//!   and the lookup runtime
//! - `views`: rendering and hit-testing over a backend-neutral painter
//! - `app`: the `Autocomplete` widget shell that hosts embed
//! - `ui`: painter, geometry, theme and rendering backends
//! - `tui`: crossterm integration (feature `tui`)

pub mod app;
pub mod core;
pub mod kernel;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;
pub mod views;
