//! Widget shell: wires input, the store, the lookup runtime and the view together.

mod autocomplete;
mod options;

pub use autocomplete::Autocomplete;
pub use options::{SelectCallback, WidgetOptions};
