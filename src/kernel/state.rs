use super::item::AutocompleteItem;

/// Which panel the widget is showing, derived from the flags in [`SearchState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Loading,
    Success,
    Empty,
    Error,
}

#[derive(Debug, Clone)]
pub struct SearchState<T> {
    pub raw_query: String,
    /// Byte offset into `raw_query`, always on a char boundary.
    pub cursor: usize,
    pub settled_query: String,
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub is_empty: bool,
    pub selected_index: usize,
}

impl<T> Default for SearchState<T> {
    fn default() -> Self {
        Self {
            raw_query: String::new(),
            cursor: 0,
            settled_query: String::new(),
            items: Vec::new(),
            loading: false,
            error: None,
            is_empty: false,
            selected_index: 0,
        }
    }
}

impl<T: AutocompleteItem> SearchState<T> {
    /// Visible panel, in render priority: loading, error, empty, results.
    pub fn phase(&self) -> SearchPhase {
        if self.loading {
            SearchPhase::Loading
        } else if self.error.is_some() {
            SearchPhase::Error
        } else if self.is_empty {
            SearchPhase::Empty
        } else if !self.items.is_empty() {
            SearchPhase::Success
        } else {
            SearchPhase::Idle
        }
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.items.get(self.selected_index)
    }

    pub fn set_query(&mut self, text: String) -> bool {
        if self.raw_query == text {
            return false;
        }
        self.raw_query = text;
        self.cursor = self.raw_query.len();
        true
    }

    pub fn insert_char(&mut self, ch: char) -> bool {
        let cursor = self.cursor.min(self.raw_query.len());
        self.raw_query.insert(cursor, ch);
        self.cursor = cursor + ch.len_utf8();
        true
    }

    pub fn insert_str(&mut self, text: &str) -> bool {
        // Single-line input: drop line breaks from pasted text.
        let text: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        if text.is_empty() {
            return false;
        }
        let cursor = self.cursor.min(self.raw_query.len());
        self.raw_query.insert_str(cursor, &text);
        self.cursor = cursor + text.len();
        true
    }

    pub fn backspace(&mut self) -> bool {
        let Some(prev) = self.prev_boundary() else {
            return false;
        };
        self.raw_query.replace_range(prev..self.cursor, "");
        self.cursor = prev;
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        let Some(next) = self.next_boundary() else {
            return false;
        };
        self.raw_query.replace_range(self.cursor..next, "");
        true
    }

    pub fn cursor_left(&mut self) -> bool {
        match self.prev_boundary() {
            Some(prev) => {
                self.cursor = prev;
                true
            }
            None => false,
        }
    }

    pub fn cursor_right(&mut self) -> bool {
        match self.next_boundary() {
            Some(next) => {
                self.cursor = next;
                true
            }
            None => false,
        }
    }

    pub fn cursor_home(&mut self) -> bool {
        let changed = self.cursor != 0;
        self.cursor = 0;
        changed
    }

    pub fn cursor_end(&mut self) -> bool {
        let end = self.raw_query.len();
        let changed = self.cursor != end;
        self.cursor = end;
        changed
    }

    /// Only moves while the result list is the visible panel.
    pub fn move_selection(&mut self, delta: isize) -> bool {
        if self.phase() != SearchPhase::Success {
            return false;
        }
        let len = self.items.len();
        let prev = self.selected_index.min(len - 1);
        let next = (prev as isize + delta).rem_euclid(len as isize) as usize;
        self.selected_index = next;
        next != prev
    }

    pub(crate) fn begin_loading(&mut self) {
        self.is_empty = false;
        self.loading = true;
    }

    pub(crate) fn apply_items(&mut self, items: Vec<T>) {
        self.loading = false;
        self.error = None;
        self.is_empty = items.is_empty();
        self.items = items;
        self.selected_index = 0;
    }

    pub(crate) fn apply_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
        self.is_empty = false;
        self.items.clear();
        self.selected_index = 0;
    }

    /// Back to `Idle` while keeping the typed text.
    pub(crate) fn clear_results(&mut self) {
        self.loading = false;
        self.error = None;
        self.is_empty = false;
        self.items.clear();
        self.selected_index = 0;
    }

    /// Back to the freshly-mounted state.
    pub(crate) fn clear_all(&mut self) {
        self.clear_results();
        self.raw_query.clear();
        self.cursor = 0;
        self.settled_query.clear();
    }

    fn prev_boundary(&self) -> Option<usize> {
        let cursor = self.cursor.min(self.raw_query.len());
        self.raw_query[..cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        let cursor = self.cursor.min(self.raw_query.len());
        self.raw_query[cursor..]
            .chars()
            .next()
            .map(|ch| cursor + ch.len_utf8())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
