use std::sync::Arc;

use tokio::sync::mpsc;

use crate::search::protocol::{FetchCommand, SearchEvent};
use crate::source::PageSource;

/// Runs fetches one at a time, in command order.
///
/// Each command is awaited to completion before the next is taken, so a
/// second call can never be outstanding while one is in flight. Resolutions
/// are reported back to the actor tagged with the generation of the request
/// they answer; failures collapse to an opaque message, with no retry.
pub(crate) fn spawn_fetch_sequencer(
    source: Arc<dyn PageSource>,
    mut command_rx: mpsc::UnboundedReceiver<FetchCommand>,
    event_tx: mpsc::UnboundedSender<SearchEvent>,
) {
    tokio::spawn(async move {
        while let Some(command) = command_rx.recv().await {
            let FetchCommand::Fetch {
                generation,
                query,
                cursor,
            } = command;

            let event = match source.fetch_page(&query, cursor.as_deref()).await {
                Ok(page) => SearchEvent::FetchFinished { generation, page },
                Err(error) => SearchEvent::FetchFailed {
                    generation,
                    error: error.to_string(),
                },
            };

            if event_tx.send(event).is_err() {
                return;
            }
        }
    });
}
