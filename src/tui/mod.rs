//! Terminal integration (crossterm).
//!
//! Kept apart from `kernel` and `views` so the widget core builds without
//! terminal crates.

pub mod crossterm;
pub mod terminal_guard;
