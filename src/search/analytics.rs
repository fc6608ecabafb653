//! Query Log
//!
//! Best-effort record of what users searched for. Entries go through a bounded channel
//! to a background task that turns each one into a structured `tracing` event. Recording
//! never waits: when the channel is full or the consumer is gone the entry is dropped.

use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuerySource {
    Search,
    Suggest,
}

impl QuerySource {
    pub fn as_str(self) -> &'static str {
        match self {
            QuerySource::Search => "search",
            QuerySource::Suggest => "suggest",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryLogEntry {
    pub query: String,
    pub results: usize,
    /// The query came from an assisted suggestion flow.
    pub assisted: bool,
    pub source: QuerySource,
}

#[derive(Clone)]
pub struct QueryLog {
    tx: mpsc::Sender<QueryLogEntry>,
}

impl QueryLog {
    /// Starts the consumer task. Must be called inside a Tokio runtime.
    pub fn spawn(capacity: usize) -> Self {
        let (tx, mut rx) = mpsc::channel::<QueryLogEntry>(capacity.max(1));

        tokio::spawn(async move {
            while let Some(entry) = rx.recv().await {
                tracing::info!(
                    target: "catalog_search::analytics",
                    query = %entry.query,
                    results = entry.results,
                    assisted = entry.assisted,
                    source = entry.source.as_str(),
                    "search query"
                );
            }
            tracing::debug!("Query log consumer stopped");
        });

        Self { tx }
    }

    /// Wraps an existing sender. Lets tests observe recorded entries.
    pub fn from_sender(tx: mpsc::Sender<QueryLogEntry>) -> Self {
        Self { tx }
    }

    pub fn record(&self, entry: QueryLogEntry) {
        if let Err(e) = self.tx.try_send(entry) {
            tracing::debug!("Dropping query log entry: {}", e);
        }
    }
}
