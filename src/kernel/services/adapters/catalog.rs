//! In-memory show catalog used as the demo lookup.
//!
//! The document is a list of `{ "score": .., "show": { "id": .., "name": .. } }`
//! entries, the shape a show-search service returns.

use crate::kernel::highlight::contains_ignore_case;
use crate::kernel::services::ports::{Lookup, LookupError, LookupFuture};
use crate::kernel::SimpleItem;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

const EMBEDDED_SHOWS: &str = include_str!("../../../../assets/shows.json");

pub const DEFAULT_LATENCY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Deserialize)]
struct SearchShowsEntry {
    show: Show,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Show {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub premiered: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ShowCatalog {
    shows: Arc<[Show]>,
    latency: Duration,
    failure_marker: Option<String>,
}

impl ShowCatalog {
    pub fn from_json(json: &str) -> Result<Self, LookupError> {
        let entries: Vec<SearchShowsEntry> = serde_json::from_str(json)?;
        let shows: Vec<Show> = entries.into_iter().map(|entry| entry.show).collect();
        tracing::debug!(count = shows.len(), "show catalog loaded");
        Ok(Self {
            shows: shows.into(),
            latency: DEFAULT_LATENCY,
            failure_marker: None,
        })
    }

    pub fn embedded() -> Result<Self, LookupError> {
        Self::from_json(EMBEDDED_SHOWS)
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Queries containing `marker` fail instead of answering, so the error
    /// panel can be exercised without a network.
    pub fn with_failure_marker(mut self, marker: impl Into<String>) -> Self {
        let marker = marker.into();
        self.failure_marker = (!marker.is_empty()).then_some(marker);
        self
    }

    pub fn len(&self) -> usize {
        self.shows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }

    pub fn shows(&self) -> &[Show] {
        &self.shows
    }

    /// Shows whose name contains `query`, ignoring case, in catalog order.
    pub fn search(&self, query: &str) -> Result<Vec<SimpleItem>, LookupError> {
        if let Some(marker) = &self.failure_marker {
            if contains_ignore_case(query, marker) {
                return Err(LookupError::msg(format!(
                    "search service unavailable for {:?}",
                    query
                )));
            }
        }

        Ok(self
            .shows
            .iter()
            .filter(|show| contains_ignore_case(&show.name, query))
            .map(|show| SimpleItem::new(show.id, show.name.as_str()))
            .collect())
    }
}

impl Lookup<SimpleItem> for ShowCatalog {
    fn lookup(&self, query: String) -> LookupFuture<SimpleItem> {
        let catalog = self.clone();
        Box::pin(async move {
            if !catalog.latency.is_zero() {
                tokio::time::sleep(catalog.latency).await;
            }
            catalog.search(&query)
        })
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/catalog.rs"]
mod tests;
