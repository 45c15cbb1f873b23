use std::future::Future;
use std::io;
use std::pin::Pin;
use std::sync::Arc;

pub type Result<T> = std::result::Result<T, LookupError>;

/// Why a lookup produced no results. The widget treats every variant the
/// same way; the split only matters for logging and custom error hooks.
#[derive(Debug)]
pub enum LookupError {
    Message(String),
    Io(io::Error),
    Parse(serde_json::Error),
    /// The lookup task panicked or was torn down by the runtime.
    Task(String),
}

impl LookupError {
    pub fn msg(message: impl Into<String>) -> Self {
        LookupError::Message(message.into())
    }
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupError::Message(msg) => f.write_str(msg),
            LookupError::Io(e) => write!(f, "IO error: {}", e),
            LookupError::Parse(e) => write!(f, "Invalid response: {}", e),
            LookupError::Task(e) => write!(f, "Lookup task failed: {}", e),
        }
    }
}

impl std::error::Error for LookupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LookupError::Io(e) => Some(e),
            LookupError::Parse(e) => Some(e),
            LookupError::Message(_) | LookupError::Task(_) => None,
        }
    }
}

impl From<io::Error> for LookupError {
    fn from(e: io::Error) -> Self {
        LookupError::Io(e)
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(e: serde_json::Error) -> Self {
        LookupError::Parse(e)
    }
}

pub type LookupFuture<T> = Pin<Box<dyn Future<Output = Result<Vec<T>>> + Send + 'static>>;

/// The widget's only data source: query text in, ordered items out.
pub trait Lookup<T>: Send + Sync + 'static {
    fn lookup(&self, query: String) -> LookupFuture<T>;
}

impl<T, F, Fut> Lookup<T> for F
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>>> + Send + 'static,
{
    fn lookup(&self, query: String) -> LookupFuture<T> {
        Box::pin(self(query))
    }
}

/// Wrap an async closure as a shareable lookup.
pub fn lookup_fn<T, F, Fut>(f: F) -> Arc<dyn Lookup<T>>
where
    T: 'static,
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>>> + Send + 'static,
{
    Arc::new(f)
}
