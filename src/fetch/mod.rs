//! Collection Fetching
//!
//! The lifecycle every resource view shares: issue one GET, normalize the
//! payload into a plain array, and settle into `Ready` or `Failed`.
//!
//! ## Architecture
//!
//! - **Transport**: async seam over the HTTP stack (reqwest natively,
//!   gloo-net in the browser)
//! - **normalize**: bare array or `{results: [...]}` envelope to `Vec<Value>`
//! - **ResourceView**: per-mount state machine with fetch tickets, so only
//!   the latest fetch of a still-mounted view lands

#[cfg(feature = "native")]
mod http;
#[cfg(test)]
pub(crate) mod mock;

#[cfg(feature = "native")]
pub use http::HttpTransport;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::config::Endpoints;
use crate::records::{Record, Resource};

/// Key of the pagination envelope
pub const RESULTS_FIELD: &str = "results";

/// Errors surfaced by a fetch or an update
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never completed
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success status
    #[error("HTTP error! status: {status}")]
    Http { status: u16, detail: String },

    /// Body was not valid JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// The backend refused an edit
    #[error("Update rejected with status {status}{}", detail_suffix(.detail))]
    UpdateRejected { status: u16, detail: Option<String> },
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(": {}", d))
        .unwrap_or_default()
}

impl FetchError {
    /// Reclassify a failed PUT as a rejected update
    pub fn into_update_rejection(self) -> Self {
        match self {
            FetchError::Http { status, detail } => FetchError::UpdateRejected {
                status,
                detail: Some(detail.trim().to_string()).filter(|d| !d.is_empty()),
            },
            other => other,
        }
    }
}

/// HTTP seam used by every view
///
/// Futures are not required to be `Send` so browser transports fit.
#[async_trait(?Send)]
pub trait Transport {
    /// GET `url` and parse the body as JSON
    async fn get_json(&self, url: &str) -> Result<Value, FetchError>;

    /// PUT `body` as JSON to `url`; the response body is ignored on success
    async fn put_json(&self, url: &str, body: &Value) -> Result<(), FetchError>;
}

/// Extract the record array from a bare array or a pagination envelope
///
/// Anything else collapses to an empty array.
pub fn normalize(payload: Value) -> Vec<Value> {
    match payload {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove(RESULTS_FIELD) {
            Some(Value::Array(items)) => items,
            other => {
                tracing::debug!(results = ?other, "Payload is not a collection, using empty list");
                Vec::new()
            }
        },
        other => {
            tracing::debug!(payload = %other, "Payload is not a collection, using empty list");
            Vec::new()
        }
    }
}

/// GET a collection and normalize it into records
pub async fn fetch_collection<T>(transport: &T, url: &str) -> Result<Vec<Record>, FetchError>
where
    T: Transport + ?Sized,
{
    tracing::debug!(url, "Fetching collection");
    let payload = transport.get_json(url).await?;
    let records: Vec<Record> = normalize(payload)
        .into_iter()
        .map(Record::from_value)
        .collect();
    tracing::debug!(url, count = records.len(), "Fetched collection");
    Ok(records)
}

/// What a resource view currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<R> {
    Loading,
    Ready(Vec<R>),
    Failed(String),
}

impl<R: Resource> ViewState<R> {
    /// Build display rows from raw records
    pub fn from_records(records: &[Record]) -> Self {
        ViewState::Ready(
            records
                .iter()
                .enumerate()
                .map(|(position, record)| R::from_record(position, record))
                .collect(),
        )
    }

    pub fn from_result(result: Result<Vec<Record>, FetchError>) -> Self {
        match result {
            Ok(records) => Self::from_records(&records),
            Err(e) => ViewState::Failed(e.to_string()),
        }
    }
}

impl<R> ViewState<R> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn items(&self) -> Option<&[R]> {
        match self {
            ViewState::Ready(items) => Some(items),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Number of loaded elements; zero until loaded
    pub fn count(&self) -> usize {
        self.items().map(<[R]>::len).unwrap_or(0)
    }
}

impl<R> Default for ViewState<R> {
    fn default() -> Self {
        ViewState::Loading
    }
}

/// Identifies one fetch issued by a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Per-mount lifecycle of one resource view
#[derive(Debug, Clone)]
pub struct ResourceView<R> {
    url: String,
    state: ViewState<R>,
    generation: u64,
    mounted: bool,
}

impl<R: Resource> ResourceView<R> {
    /// Mount the view against its endpoint
    pub fn mount(endpoints: &Endpoints) -> Self {
        Self::with_url(endpoints.url(R::KIND))
    }

    pub fn with_url(url: &str) -> Self {
        Self {
            url: url.to_string(),
            state: ViewState::Loading,
            generation: 0,
            mounted: true,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn state(&self) -> &ViewState<R> {
        &self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Enter `Loading` and issue a ticket for the fetch about to start
    pub fn begin(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state = ViewState::Loading;
        FetchTicket(self.generation)
    }

    /// Bind a different endpoint; returns a ticket when a refetch is due
    pub fn rebind(&mut self, url: &str) -> Option<FetchTicket> {
        if url == self.url {
            return None;
        }
        self.url = url.to_string();
        Some(self.begin())
    }

    /// Apply a fetch outcome
    ///
    /// Returns `false` and leaves state untouched when the view was unmounted
    /// or a newer fetch has been issued since `ticket`.
    pub fn settle(&mut self, ticket: FetchTicket, result: Result<Vec<Record>, FetchError>) -> bool {
        if !self.mounted {
            tracing::debug!(resource = %R::KIND, "Dropping response for unmounted view");
            return false;
        }
        if ticket.0 != self.generation {
            tracing::debug!(resource = %R::KIND, "Dropping superseded response");
            return false;
        }

        if let Err(e) = &result {
            tracing::error!(resource = %R::KIND, url = %self.url, error = %e, "Failed to load collection");
        }
        self.state = ViewState::from_result(result);
        true
    }

    /// Replace the collection wholesale
    pub fn replace(&mut self, records: &[Record]) {
        if self.mounted {
            self.state = ViewState::from_records(records);
        }
    }

    /// Discard the collection; later responses become no-ops
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.state = ViewState::Loading;
    }

    /// Run one full fetch cycle
    pub async fn load<T>(&mut self, transport: &T) -> &ViewState<R>
    where
        T: Transport + ?Sized,
    {
        let ticket = self.begin();
        let result = fetch_collection(transport, &self.url).await;
        self.settle(ticket, result);
        &self.state
    }
}
