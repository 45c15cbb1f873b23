//! Headless widget core (state/action/effect).

pub mod action;
pub mod debounce;
pub mod effect;
pub mod highlight;
pub mod item;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE_DELAY};
pub use effect::Effect;
pub use highlight::{split_text, TextChunk};
pub use item::{AutocompleteItem, ItemValue, SimpleItem};
pub use state::{SearchPhase, SearchState};
pub use store::{DispatchResult, ErrorFormatter, Store, DEFAULT_ERROR_MESSAGE};
