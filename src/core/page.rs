/// Page session
///
/// Wires a content store to a filter view for one visit: the view is handed
/// out straight away and the single data load runs in the background.

use crate::core::filter::FilterView;
use crate::core::source::ProjectSource;
use crate::core::store::{ContentStore, LoadOutcome};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::debug;

pub struct PortfolioPage {
    view: FilterView,
    load: Option<JoinHandle<LoadOutcome>>,
}

impl PortfolioPage {
    /// Present the page and schedule its one load
    ///
    /// Must be called from inside a tokio runtime.
    pub fn present(mut store: ContentStore, source: Arc<dyn ProjectSource>) -> Self {
        let view = FilterView::new(store.subscribe());
        let load = tokio::spawn(async move { store.load(source.as_ref()).await });

        Self {
            view,
            load: Some(load),
        }
    }

    pub fn view(&self) -> &FilterView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut FilterView {
        &mut self.view
    }

    /// Whether the background load has finished
    pub fn is_settled(&self) -> bool {
        self.load.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Wait for the background load
    ///
    /// Returns `None` if it was already awaited or the task died.
    pub async fn settle(&mut self) -> Option<LoadOutcome> {
        let handle = self.load.take()?;
        match handle.await {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                debug!(error = %e, "project load task ended without a result");
                None
            }
        }
    }
}

impl Drop for PortfolioPage {
    fn drop(&mut self) {
        // a load still in flight has nobody left to update
        if let Some(handle) = self.load.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{default_projects, ProjectRecord};
    use crate::core::source::HttpSource;
    use crate::error::{FailureKind, Result};
    use async_trait::async_trait;
    use tokio::sync::Notify;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Source that doesn't answer until released
    struct GatedSource {
        gate: Arc<Notify>,
        projects: Vec<ProjectRecord>,
    }

    #[async_trait]
    impl ProjectSource for GatedSource {
        async fn fetch(&self) -> Result<Vec<ProjectRecord>> {
            self.gate.notified().await;
            Ok(self.projects.clone())
        }

        fn describe(&self) -> String {
            "gated".to_string()
        }
    }

    fn fetched() -> Vec<ProjectRecord> {
        vec![ProjectRecord::new("Hosted Project", "2026", "From the data file.")
            .with_tags(["Rust"])]
    }

    #[tokio::test]
    async fn test_view_usable_before_load_resolves() {
        let gate = Arc::new(Notify::new());
        let source = Arc::new(GatedSource {
            gate: Arc::clone(&gate),
            projects: fetched(),
        });

        let mut page = PortfolioPage::present(ContentStore::new(), source);

        page.view_mut().set_query("opencv");
        assert_eq!(page.view().visible().len(), 1);
        assert!(!page.is_settled());

        gate.notify_one();
        let outcome = page.settle().await;

        assert_eq!(outcome, Some(LoadOutcome::Replaced { count: 1 }));
        assert!(page.view().visible().is_empty());

        page.view_mut().set_query("rust");
        assert_eq!(page.view().visible(), fetched());
    }

    #[tokio::test]
    async fn test_present_with_http_source() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(serde_json::to_string(&fetched()).unwrap()),
            )
            .expect(1)
            .mount(&server)
            .await;

        let source = Arc::new(HttpSource::new(format!("{}/projects.json", server.uri())));
        let mut page = PortfolioPage::present(ContentStore::new(), source);

        assert_eq!(page.settle().await, Some(LoadOutcome::Replaced { count: 1 }));
        assert_eq!(page.view().visible(), fetched());
    }

    #[tokio::test]
    async fn test_missing_file_keeps_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let source = Arc::new(HttpSource::new(format!("{}/projects.json", server.uri())));
        let mut page = PortfolioPage::present(ContentStore::new(), source);

        assert_eq!(
            page.settle().await,
            Some(LoadOutcome::KeptDefaults {
                failure: FailureKind::Transport
            })
        );
        assert_eq!(page.view().visible(), default_projects());
    }

    #[tokio::test]
    async fn test_settle_twice() {
        let source = Arc::new(GatedSource {
            gate: Arc::new(Notify::new()),
            projects: fetched(),
        });
        source.gate.notify_one();

        let mut page = PortfolioPage::present(ContentStore::new(), source);
        assert!(page.settle().await.is_some());
        assert!(page.settle().await.is_none());
        assert!(page.is_settled());
    }

    #[tokio::test]
    async fn test_drop_before_load_resolves() {
        let gate = Arc::new(Notify::new());
        let source = Arc::new(GatedSource {
            gate: Arc::clone(&gate),
            projects: fetched(),
        });

        let page = PortfolioPage::present(ContentStore::new(), source);
        drop(page);

        // releasing the gate after teardown must not panic or deadlock
        gate.notify_one();
        tokio::task::yield_now().await;
    }
}
