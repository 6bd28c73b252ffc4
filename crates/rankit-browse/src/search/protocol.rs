use tokio::sync::oneshot;

use crate::error::BrowseResult;
use crate::page::{ListItem, Page};
use crate::search::types::SearchAck;

/// Messages consumed by the search actor: user operations (each with a reply
/// channel) and fetch resolutions reported by the sequencer.
pub enum SearchEvent {
    Start {
        query: String,
        reply: oneshot::Sender<BrowseResult<SearchAck>>,
    },
    Continue {
        reply: oneshot::Sender<BrowseResult<SearchAck>>,
    },
    Clear {
        reply: oneshot::Sender<BrowseResult<SearchAck>>,
    },
    FetchFinished {
        generation: u64,
        page: Page<ListItem>,
    },
    FetchFailed {
        generation: u64,
        error: String,
    },
}

/// Commands consumed by the fetch sequencer.
pub enum FetchCommand {
    Fetch {
        generation: u64,
        query: String,
        cursor: Option<String>,
    },
}
