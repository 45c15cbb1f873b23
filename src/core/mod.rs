//! Frontend-neutral building blocks shared by the widget and its hosts.

pub mod event;

pub use event::{InputEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};
