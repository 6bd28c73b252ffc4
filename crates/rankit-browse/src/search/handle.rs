use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use crate::bus::Bus;
use crate::error::{BrowseError, BrowseResult};
use crate::search::actor::SearchActor;
use crate::search::protocol::SearchEvent;
use crate::search::sequencer::spawn_fetch_sequencer;
use crate::search::types::SearchAck;
use crate::source::PageSource;

/// Cloneable handle to a running search engine.
#[derive(Clone)]
pub struct SearchHandle {
    event_tx: mpsc::UnboundedSender<SearchEvent>,
}

impl SearchHandle {
    pub fn is_closed(&self) -> bool {
        self.event_tx.is_closed()
    }

    /// Start a fresh search for `query`, discarding the current session.
    /// Dropped silently if a fetch is already loading.
    pub async fn start_search(&self, query: impl Into<String>) -> BrowseResult<SearchAck> {
        self.request(|reply| SearchEvent::Start {
            query: query.into(),
            reply,
        })
        .await
    }

    /// Fetch the next page of the current session. Dropped silently if a
    /// fetch is already loading or there is no continuation cursor.
    pub async fn continue_search(&self) -> BrowseResult<SearchAck> {
        self.request(|reply| SearchEvent::Continue { reply }).await
    }

    /// Empty the search-text field and start a fresh unfiltered search.
    /// The fetch part is dropped silently if one is already loading.
    pub async fn clear_search(&self) -> BrowseResult<SearchAck> {
        self.request(|reply| SearchEvent::Clear { reply }).await
    }

    async fn request<F>(&self, event: F) -> BrowseResult<SearchAck>
    where
        F: FnOnce(oneshot::Sender<BrowseResult<SearchAck>>) -> SearchEvent,
    {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.event_tx
            .send(event(reply_tx))
            .map_err(|_| BrowseError::Internal("search engine stopped".to_string()))?;
        reply_rx
            .await
            .map_err(|_| BrowseError::Internal("search engine dropped response".to_string()))?
    }
}

/// Spawn the search engine for `source` and return its handle.
///
/// The engine immediately loads the unfiltered list (an empty-query search)
/// and publishes every state change on `bus`.
pub fn spawn_search_engine(source: Arc<dyn PageSource>, bus: Bus) -> SearchHandle {
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    spawn_fetch_sequencer(source, command_rx, event_tx.clone());

    let actor = SearchActor::new(bus, event_tx.clone(), event_rx, command_tx);
    tokio::spawn(async move {
        actor.run().await;
    });

    SearchHandle { event_tx }
}
