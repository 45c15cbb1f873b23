use super::options::{SelectCallback, WidgetOptions};
use crate::core::event::{InputEvent, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use crate::kernel::services::adapters::{LookupMessage, LookupRuntime};
use crate::kernel::services::ports::WidgetConfig;
use crate::kernel::{Action, AutocompleteItem, Effect, SearchState, Store};
use crate::ui::backend::Backend;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::Painter;
use crate::ui::core::theme::Theme;
use crate::views::AutocompleteView;
use std::io;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::Instant;

const MAX_LOOKUP_DRAIN_PER_TICK: usize = 64;

/// A search-as-you-type widget.
///
/// The host owns the event loop: it forwards input through
/// [`Autocomplete::handle_input`], calls [`Autocomplete::tick`] at least as
/// often as [`Autocomplete::next_deadline`] asks, and repaints whenever either
/// returns `true`. Dropping the widget cancels pending work.
pub struct Autocomplete<T: AutocompleteItem> {
    store: Store<T>,
    runtime: LookupRuntime<T>,
    rx: Receiver<LookupMessage<T>>,
    config: WidgetConfig,
    theme: Theme,
    on_select: Option<SelectCallback<T>>,
    view: AutocompleteView,
}

impl<T: AutocompleteItem> Autocomplete<T> {
    pub fn new(options: WidgetOptions<T>) -> io::Result<Self> {
        let WidgetOptions {
            lookup,
            config,
            on_select,
            on_error,
            theme,
        } = options;

        let (tx, rx) = mpsc::channel();
        let runtime = LookupRuntime::new(lookup, tx)?;

        let mut store = Store::new(config.debounce_delay());
        if let Some(format_error) = on_error {
            store = store.with_error_formatter(format_error);
        }

        tracing::debug!(
            class = %config.root_class(),
            debounce_ms = config.debounce_delay_ms,
            "autocomplete mounted"
        );

        Ok(Self {
            store,
            runtime,
            rx,
            config,
            theme,
            on_select,
            view: AutocompleteView::new(),
        })
    }

    pub fn state(&self) -> &SearchState<T> {
        self.store.state()
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn root_class(&self) -> String {
        self.config.root_class()
    }

    /// Earliest instant at which [`Autocomplete::tick`] has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.store.debounce_deadline()
    }

    /// Replace the whole input text, as if the user had typed it at `now`.
    pub fn set_query(&mut self, text: impl Into<String>, now: Instant) -> bool {
        self.dispatch(Action::SetQuery {
            text: text.into(),
            at: now,
        })
    }

    pub fn select(&mut self, index: usize) -> bool {
        self.dispatch(Action::Select { index })
    }

    /// Returns `true` if the widget needs repainting.
    pub fn handle_input(&mut self, event: &InputEvent, now: Instant) -> bool {
        match event {
            InputEvent::Key(key) => self.handle_key(key, now),
            InputEvent::Mouse(mouse) => self.handle_mouse(mouse),
            InputEvent::Paste(text) => self.dispatch(Action::InsertText {
                text: text.clone(),
                at: now,
            }),
            InputEvent::FocusGained => self.view.set_focused(true),
            InputEvent::FocusLost => self.view.set_focused(false),
            InputEvent::Resize(..) => true,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, now: Instant) -> bool {
        if key.is_release() {
            return false;
        }
        if let Some(ch) = key.typed_char() {
            return self.dispatch(Action::InsertChar { ch, at: now });
        }
        let action = match key.code {
            KeyCode::Backspace => Action::Backspace { at: now },
            KeyCode::Delete => Action::DeleteForward { at: now },
            KeyCode::Left => Action::CursorLeft,
            KeyCode::Right => Action::CursorRight,
            KeyCode::Home => Action::CursorHome,
            KeyCode::End => Action::CursorEnd,
            KeyCode::Up => Action::MoveSelection { delta: -1 },
            KeyCode::Down | KeyCode::Tab => Action::MoveSelection { delta: 1 },
            KeyCode::BackTab => Action::MoveSelection { delta: -1 },
            KeyCode::Enter => Action::SelectHighlighted,
            _ => return false,
        };
        self.dispatch(action)
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                match self.view.hit_test_row(mouse.column, mouse.row) {
                    Some(index) => self.dispatch(Action::Select { index }),
                    None => false,
                }
            }
            MouseEventKind::ScrollUp => self.dispatch(Action::MoveSelection { delta: -1 }),
            MouseEventKind::ScrollDown => self.dispatch(Action::MoveSelection { delta: 1 }),
            _ => false,
        }
    }

    /// Apply finished lookups, then settle the debounce if it is due.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        for _ in 0..MAX_LOOKUP_DRAIN_PER_TICK {
            match self.rx.try_recv() {
                Ok(LookupMessage {
                    request_id,
                    outcome,
                }) => {
                    self.runtime.complete(request_id);
                    changed |= self.dispatch(Action::LookupFinished {
                        request_id,
                        outcome,
                    });
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::warn!("lookup channel disconnected");
                    break;
                }
            }
        }

        changed |= self.dispatch(Action::Tick { now });
        changed
    }

    pub fn paint(&mut self, painter: &mut Painter, area: Rect) {
        self.view
            .paint(painter, area, self.store.state(), &self.config, &self.theme);
    }

    pub fn cursor_position(&self) -> Option<Pos> {
        self.view.cursor_position(self.store.state())
    }

    /// Paint into `backend` and place the cursor.
    pub fn render(&mut self, backend: &mut dyn Backend, area: Rect) {
        let mut painter = Painter::new();
        self.paint(&mut painter, area);
        backend.draw(area, painter.cmds());
        backend.set_cursor(self.cursor_position());
    }

    fn dispatch(&mut self, action: Action<T>) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect);
        }
        result.state_changed
    }

    fn run_effect(&mut self, effect: Effect<T>) {
        match effect {
            Effect::StartLookup { request_id, query } => self.runtime.start(request_id, query),
            Effect::CancelLookup { request_id } => {
                self.runtime.cancel(request_id);
            }
            Effect::ItemSelected(item) => match self.on_select.as_mut() {
                Some(on_select) => on_select(item),
                None => tracing::debug!(id = ?item.id(), "selection without handler"),
            },
        }
    }
}

impl<T: AutocompleteItem> Drop for Autocomplete<T> {
    fn drop(&mut self) {
        self.dispatch(Action::Teardown);
        self.runtime.cancel_all();
        tracing::debug!("autocomplete torn down");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/autocomplete.rs"]
mod tests;
