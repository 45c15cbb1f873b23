use super::message::LookupMessage;
use crate::kernel::services::ports::{Lookup, LookupError};
use rustc_hash::FxHashMap;
use std::io;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use tokio::task::AbortHandle;

pub struct LookupRuntime<T> {
    runtime: tokio::runtime::Runtime,
    lookup: Arc<dyn Lookup<T>>,
    tx: Sender<LookupMessage<T>>,
    tasks: FxHashMap<u64, AbortHandle>,
}

impl<T: Send + 'static> LookupRuntime<T> {
    pub fn new(lookup: Arc<dyn Lookup<T>>, tx: Sender<LookupMessage<T>>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("typeahead-lookup")
            .enable_all()
            .build()
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to create tokio runtime");
                e
            })?;
        Ok(Self {
            runtime,
            lookup,
            tx,
            tasks: FxHashMap::default(),
        })
    }

    /// Lookups started and not yet completed or cancelled.
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    pub fn start(&mut self, request_id: u64, query: String) {
        let inner = self.runtime.spawn(self.lookup.lookup(query));
        let abort = inner.abort_handle();
        let tx = self.tx.clone();

        // The outer task survives a panicking lookup so the widget still hears back.
        self.runtime.spawn(async move {
            let outcome = match inner.await {
                Ok(outcome) => outcome,
                Err(e) if e.is_cancelled() => {
                    tracing::trace!(request_id, "lookup aborted");
                    return;
                }
                Err(e) => Err(LookupError::Task(e.to_string())),
            };
            let _ = tx.send(LookupMessage {
                request_id,
                outcome,
            });
        });

        self.tasks.insert(request_id, abort);
    }

    pub fn cancel(&mut self, request_id: u64) -> bool {
        match self.tasks.remove(&request_id) {
            Some(abort) => {
                abort.abort();
                true
            }
            None => false,
        }
    }

    /// Forget a task whose result has been received.
    pub fn complete(&mut self, request_id: u64) {
        self.tasks.remove(&request_id);
    }

    pub fn cancel_all(&mut self) {
        for (_, abort) in self.tasks.drain() {
            abort.abort();
        }
    }
}

impl<T> Drop for LookupRuntime<T> {
    fn drop(&mut self) {
        for (_, abort) in self.tasks.drain() {
            abort.abort();
        }
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/runtime.rs"]
mod tests;
