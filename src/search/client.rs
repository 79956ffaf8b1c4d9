use crate::error::SearchError;
use crate::models::{SearchQuery, SearchResponse};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::oneshot;

/// Whether a search replaces the table or extends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    /// Input-triggered: the table is cleared before the results go in.
    Replace,
    /// Scroll-triggered: results accumulate under the existing rows.
    Append,
}

/// The seam between the widget and the directory service.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, SearchError>;
}

/// reqwest-backed implementation of [`SearchBackend`].
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/api/users", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SearchBackend for HttpBackend {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, SearchError> {
        let response = self.client.get(&self.endpoint).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::status(status.as_u16()));
        }
        response
            .json::<SearchResponse>()
            .await
            .map_err(SearchError::Decode)
    }
}

/// Handle to the one in-flight search.
///
/// The request itself runs on the tokio runtime; the frame loop polls this
/// handle non-blockingly until it settles. A dropped sender (the task died)
/// settles as [`SearchError::Canceled`] so the caller's release path still
/// runs.
#[derive(Debug)]
pub struct PendingSearch {
    kind: SearchKind,
    rx: oneshot::Receiver<Result<SearchResponse, SearchError>>,
}

impl PendingSearch {
    pub fn kind(&self) -> SearchKind {
        self.kind
    }

    /// Non-blocking poll; `None` while the request is still in flight.
    pub fn try_settle(&mut self) -> Option<(SearchKind, Result<SearchResponse, SearchError>)> {
        match self.rx.try_recv() {
            Ok(outcome) => Some((self.kind, outcome)),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => {
                Some((self.kind, Err(SearchError::Canceled)))
            }
        }
    }
}

/// Dispatches searches onto the async runtime.
///
/// The client holds no gate state of its own: the caller owns the
/// [`RequestGate`](crate::search::RequestGate) and only dispatches after
/// winning it.
pub struct SearchClient {
    backend: Arc<dyn SearchBackend>,
    runtime: tokio::runtime::Handle,
}

impl SearchClient {
    pub fn new(backend: Arc<dyn SearchBackend>, runtime: tokio::runtime::Handle) -> Self {
        Self { backend, runtime }
    }

    pub fn dispatch(&self, query: SearchQuery, kind: SearchKind) -> PendingSearch {
        tracing::debug!(term = %query.search_term, ?kind, "dispatching search");
        let (tx, rx) = oneshot::channel();
        let backend = Arc::clone(&self.backend);
        self.runtime.spawn(async move {
            let outcome = backend.search(&query).await;
            // The receiver may already be gone on app teardown.
            let _ = tx.send(outcome);
        });
        PendingSearch { kind, rx }
    }
}
