use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};

use super::debounce::Debouncer;
use super::item::AutocompleteItem;
use super::services::ports::LookupError;
use super::{Action, Effect, SearchPhase, SearchState};

pub const DEFAULT_ERROR_MESSAGE: &str = "We couldn't reach the search service. Please try again";

pub type ErrorFormatter = Box<dyn Fn(&LookupError) -> String>;

pub struct DispatchResult<T> {
    pub effects: Vec<Effect<T>>,
    pub state_changed: bool,
}

impl<T> DispatchResult<T> {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

/// Owns the search state machine: debounced query, lookup lifecycle and
/// selection. Every transition goes through [`Store::dispatch`].
pub struct Store<T: AutocompleteItem> {
    state: SearchState<T>,
    debouncer: Debouncer<String>,
    format_error: Option<ErrorFormatter>,
    next_request_id: u64,
    in_flight: Option<u64>,
    torn_down: bool,
}

impl<T: AutocompleteItem> Store<T> {
    pub fn new(debounce_delay: Duration) -> Self {
        Self {
            state: SearchState::default(),
            debouncer: Debouncer::new(String::new(), debounce_delay),
            format_error: None,
            next_request_id: 0,
            in_flight: None,
            torn_down: false,
        }
    }

    pub fn with_error_formatter(mut self, format_error: ErrorFormatter) -> Self {
        self.format_error = Some(format_error);
        self
    }

    pub fn state(&self) -> &SearchState<T> {
        &self.state
    }

    /// When the pending settlement is due, if any.
    pub fn debounce_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// The request whose completion is still allowed to update the state.
    pub fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn dispatch(&mut self, action: Action<T>) -> DispatchResult<T> {
        if self.torn_down {
            tracing::trace!(action = ?ActionKind::of(&action), "dispatch after teardown ignored");
            return DispatchResult::unchanged();
        }

        match action {
            Action::SetQuery { text, at } => {
                let changed = self.state.set_query(text);
                self.query_edited(changed, at)
            }
            Action::InsertChar { ch, at } => {
                let changed = self.state.insert_char(ch);
                self.query_edited(changed, at)
            }
            Action::InsertText { text, at } => {
                let changed = self.state.insert_str(&text);
                self.query_edited(changed, at)
            }
            Action::Backspace { at } => {
                let changed = self.state.backspace();
                self.query_edited(changed, at)
            }
            Action::DeleteForward { at } => {
                let changed = self.state.delete_forward();
                self.query_edited(changed, at)
            }
            Action::CursorLeft => DispatchResult::changed(self.state.cursor_left()),
            Action::CursorRight => DispatchResult::changed(self.state.cursor_right()),
            Action::CursorHome => DispatchResult::changed(self.state.cursor_home()),
            Action::CursorEnd => DispatchResult::changed(self.state.cursor_end()),
            Action::MoveSelection { delta } => {
                DispatchResult::changed(self.state.move_selection(delta))
            }
            Action::Tick { now } => match self.debouncer.poll(now) {
                Some(query) => self.settle(query),
                None => DispatchResult::unchanged(),
            },
            Action::LookupFinished {
                request_id,
                outcome,
            } => self.finish_lookup(request_id, outcome),
            Action::Select { index } => self.select(index),
            Action::SelectHighlighted => self.select(self.state.selected_index),
            Action::Teardown => self.teardown(),
        }
    }

    fn query_edited(&mut self, changed: bool, at: Instant) -> DispatchResult<T> {
        if changed {
            self.debouncer.set(self.state.raw_query.clone(), at);
        }
        DispatchResult::changed(changed)
    }

    fn settle(&mut self, query: String) -> DispatchResult<T> {
        let mut effects = Vec::new();
        self.state.settled_query = query.clone();

        if let Some(request_id) = self.in_flight.take() {
            effects.push(Effect::CancelLookup { request_id });
        }

        if query.is_empty() {
            tracing::debug!("query cleared, back to idle");
            self.state.clear_results();
            return DispatchResult {
                effects,
                state_changed: true,
            };
        }

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight = Some(request_id);
        self.state.begin_loading();

        tracing::debug!(request_id, query = %query, "lookup started");
        effects.push(Effect::StartLookup { request_id, query });

        DispatchResult {
            effects,
            state_changed: true,
        }
    }

    fn finish_lookup(
        &mut self,
        request_id: u64,
        outcome: Result<Vec<T>, LookupError>,
    ) -> DispatchResult<T> {
        if self.in_flight != Some(request_id) {
            tracing::trace!(request_id, latest = ?self.in_flight, "stale lookup result dropped");
            return DispatchResult::unchanged();
        }
        self.in_flight = None;

        match outcome {
            Ok(items) => {
                warn_duplicate_ids(&items);
                tracing::debug!(request_id, count = items.len(), "lookup finished");
                self.state.apply_items(items);
            }
            Err(err) => {
                tracing::warn!(request_id, error = %err, "lookup failed");
                let message = match &self.format_error {
                    Some(format_error) => format_error(&err),
                    None => DEFAULT_ERROR_MESSAGE.to_string(),
                };
                self.state.apply_error(message);
            }
        }

        DispatchResult::changed(true)
    }

    fn select(&mut self, index: usize) -> DispatchResult<T> {
        // Items kept around during a re-fetch are hidden and not selectable.
        if self.state.phase() != SearchPhase::Success {
            return DispatchResult::unchanged();
        }
        let Some(item) = self.state.items.get(index).cloned() else {
            return DispatchResult::unchanged();
        };

        let mut effects = Vec::new();
        if let Some(request_id) = self.in_flight.take() {
            effects.push(Effect::CancelLookup { request_id });
        }

        self.debouncer.reset(String::new());
        self.state.clear_all();
        tracing::debug!(id = ?item.id(), "item selected");
        effects.push(Effect::ItemSelected(item));

        DispatchResult {
            effects,
            state_changed: true,
        }
    }

    fn teardown(&mut self) -> DispatchResult<T> {
        self.torn_down = true;
        self.debouncer.cancel();

        let effects = self
            .in_flight
            .take()
            .map(|request_id| Effect::CancelLookup { request_id })
            .into_iter()
            .collect();

        DispatchResult {
            effects,
            state_changed: false,
        }
    }
}

fn warn_duplicate_ids<T: AutocompleteItem>(items: &[T]) {
    let mut seen = FxHashSet::default();
    for item in items {
        let id = item.id();
        if seen.contains(&id) {
            tracing::warn!(id = ?id, "duplicate item id in lookup results");
        } else {
            seen.insert(id);
        }
    }
}

/// Payload-free action name for logs.
#[derive(Debug)]
enum ActionKind {
    Edit,
    Cursor,
    MoveSelection,
    Tick,
    LookupFinished(u64),
    Select,
    Teardown,
}

impl ActionKind {
    fn of<T>(action: &Action<T>) -> Self {
        match action {
            Action::SetQuery { .. }
            | Action::InsertChar { .. }
            | Action::InsertText { .. }
            | Action::Backspace { .. }
            | Action::DeleteForward { .. } => ActionKind::Edit,
            Action::CursorLeft | Action::CursorRight | Action::CursorHome | Action::CursorEnd => {
                ActionKind::Cursor
            }
            Action::MoveSelection { .. } => ActionKind::MoveSelection,
            Action::Tick { .. } => ActionKind::Tick,
            Action::LookupFinished { request_id, .. } => ActionKind::LookupFinished(*request_id),
            Action::Select { .. } | Action::SelectHighlighted => ActionKind::Select,
            Action::Teardown => ActionKind::Teardown,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
