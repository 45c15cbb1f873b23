//! Service interfaces the kernel depends on.

pub mod config;
pub mod lookup;

pub use config::WidgetConfig;
pub use lookup::{lookup_fn, Lookup, LookupError, LookupFuture};
