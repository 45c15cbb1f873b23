//! Async runtime adapter: runs lookups and sends their results back to the UI thread.

mod message;
mod runtime;

pub use message::LookupMessage;
pub use runtime::LookupRuntime;
