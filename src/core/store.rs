/// Content store
///
/// Holds the authoritative project list for one page session. Starts out
/// with the built-in defaults and makes exactly one attempt to swap them for
/// the hosted data file.

use crate::content::{default_projects, ProjectRecord};
use crate::core::source::ProjectSource;
use crate::error::FailureKind;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Immutable view of the held list at one point in time
pub type Snapshot = Arc<Vec<ProjectRecord>>;

/// What a call to [`ContentStore::load`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The fetched list replaced the held one wholesale
    Replaced { count: usize },
    /// The fetch failed; the held list is unchanged
    KeptDefaults { failure: FailureKind },
    /// `load` already ran for this store; nothing was fetched
    AlreadyLoaded,
}

/// Single-writer cell holding the current project list
///
/// Readers subscribe and always see the latest snapshot. The store is the
/// only thing that ever publishes a new one.
pub struct ContentStore {
    sender: watch::Sender<Snapshot>,
    loaded: bool,
}

impl ContentStore {
    /// Create a store holding the built-in project list
    pub fn new() -> Self {
        Self::with_defaults(default_projects())
    }

    /// Create a store holding a caller-supplied fallback list
    pub fn with_defaults(defaults: Vec<ProjectRecord>) -> Self {
        let (sender, _) = watch::channel(Arc::new(defaults));
        Self {
            sender,
            loaded: false,
        }
    }

    /// Current held list
    pub fn snapshot(&self) -> Snapshot {
        self.sender.borrow().clone()
    }

    /// Receiver that tracks every list this store publishes
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.sender.subscribe()
    }

    /// Whether `load` has run
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Fetch the data file once and replace the held list on success
    ///
    /// Never fails. Any error keeps the held list and is only logged.
    /// Calls after the first return [`LoadOutcome::AlreadyLoaded`].
    pub async fn load(&mut self, source: &dyn ProjectSource) -> LoadOutcome {
        if self.loaded {
            return LoadOutcome::AlreadyLoaded;
        }
        self.loaded = true;

        debug!(source = %source.describe(), "loading project data");

        match source.fetch().await {
            Ok(projects) => {
                let count = projects.len();
                // send_replace publishes even when no view is listening anymore
                self.sender.send_replace(Arc::new(projects));
                info!(source = %source.describe(), count, "project data loaded");
                LoadOutcome::Replaced { count }
            }
            Err(e) => {
                let failure = e.kind();
                warn!(
                    source = %source.describe(),
                    %failure,
                    error = %e,
                    "project data unavailable, keeping built-in list"
                );
                LoadOutcome::KeptDefaults { failure }
            }
        }
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}
