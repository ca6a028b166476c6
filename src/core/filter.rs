/// Filter view
///
/// Owns the query text and derives the visible projects from the store's
/// current snapshot. Never touches the store itself.

use crate::content::ProjectRecord;
use crate::core::store::Snapshot;
use tokio::sync::watch;

/// Projects whose title or any tag contains `query`, ignoring case
///
/// An empty query keeps every project. Relative order is always preserved.
pub fn filter_projects<'a>(projects: &'a [ProjectRecord], query: &str) -> Vec<&'a ProjectRecord> {
    if query.is_empty() {
        return projects.iter().collect();
    }

    let lowered = query.to_lowercase();
    projects
        .iter()
        .filter(|project| project.matches(&lowered))
        .collect()
}

/// Live, case-insensitive filter over a content store
pub struct FilterView {
    query: String,
    store: watch::Receiver<Snapshot>,
}

impl FilterView {
    /// Create a view over a store subscription, with an empty query
    pub fn new(store: watch::Receiver<Snapshot>) -> Self {
        Self {
            query: String::new(),
            store,
        }
    }

    /// Replace the query. Any text is accepted, including empty.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The store's list as this view currently sees it
    pub fn snapshot(&self) -> Snapshot {
        self.store.borrow().clone()
    }

    /// Projects to display for the current store and query
    pub fn visible(&self) -> Vec<ProjectRecord> {
        let snapshot = self.snapshot();
        filter_projects(&snapshot, &self.query)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Wait until the store publishes a new list
    ///
    /// Returns `false` once the store is gone and nothing more can arrive.
    pub async fn changed(&mut self) -> bool {
        self.store.changed().await.is_ok()
    }
}
