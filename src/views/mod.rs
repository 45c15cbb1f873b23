//! Views: pure rendering and hit-testing, no state mutation outside their own layout cache.

pub mod autocomplete;

pub use autocomplete::AutocompleteView;
