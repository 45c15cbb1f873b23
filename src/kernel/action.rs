use super::services::ports::LookupError;
use std::time::Instant;

/// Everything that can change a [`super::Store`].
///
/// Edits carry the time they happened so the debounce window is measured
/// from the keystroke, not from whenever the store gets to it.
#[derive(Debug)]
pub enum Action<T> {
    SetQuery { text: String, at: Instant },
    InsertChar { ch: char, at: Instant },
    InsertText { text: String, at: Instant },
    Backspace { at: Instant },
    DeleteForward { at: Instant },
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    MoveSelection { delta: isize },
    Tick { now: Instant },
    LookupFinished {
        request_id: u64,
        outcome: Result<Vec<T>, LookupError>,
    },
    Select { index: usize },
    SelectHighlighted,
    Teardown,
}
