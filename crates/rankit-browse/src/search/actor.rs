
use tokio::sync::mpsc;

use crate::bus::Bus;
use crate::error::{BrowseError, BrowseResult};
use crate::event::{BrowseEvent, SearchFailedPayload, SearchLoadedPayload, SearchStartedPayload};
use crate::page::{ListItem, Page};
use crate::search::protocol::{FetchCommand, SearchEvent};
use crate::search::session::{LoadState, SearchSession};
use crate::search::types::SearchAck;

/// Owns the current [`SearchSession`] and serializes every mutation.
///
/// Fetch resolutions carry the generation of the request they answer; a
/// resolution whose generation does not match the in-flight record belongs to
/// a superseded session and is dropped.
pub(crate) struct SearchActor {
    session: SearchSession,
    generation: u64,
    inflight: Option<InflightFetch>,
    bus: Bus,
    event_tx: mpsc::UnboundedSender<SearchEvent>,
    event_rx: mpsc::UnboundedReceiver<SearchEvent>,
    command_tx: mpsc::UnboundedSender<FetchCommand>,
}

#[derive(Clone, Copy)]
struct InflightFetch {
    generation: u64,
    mode: FetchMode,
}

#[derive(Clone, Copy)]
enum FetchMode {
    Fresh,
    Continuation,
}

impl SearchActor {
    pub(crate) fn new(
        bus: Bus,
        event_tx: mpsc::UnboundedSender<SearchEvent>,
        event_rx: mpsc::UnboundedReceiver<SearchEvent>,
        command_tx: mpsc::UnboundedSender<FetchCommand>,
    ) -> Self {
        Self {
            session: SearchSession::new(),
            generation: 0,
            inflight: None,
            bus,
            event_tx,
            event_rx,
            command_tx,
        }
    }

    pub(crate) async fn run(mut self) {
        // Load the unfiltered list immediately.
        if let Err(error) = self.handle_start(String::new()) {
            tracing::warn!("initial search failed to start: {error}");
        }

        while let Some(event) = self.event_rx.recv().await {
            match event {
                SearchEvent::Start { query, reply } => {
                    let _ = reply.send(self.handle_start(query));
                }
                SearchEvent::Continue { reply } => {
                    let _ = reply.send(self.handle_continue());
                }
                SearchEvent::Clear { reply } => {
                    let _ = reply.send(self.handle_clear());
                }
                SearchEvent::FetchFinished { generation, page } => {
                    self.handle_fetch_finished(generation, page);
                }
                SearchEvent::FetchFailed { generation, error } => {
                    self.handle_fetch_failed(generation, &error);
                }
            }
        }
    }

    fn handle_start(&mut self, query: String) -> BrowseResult<SearchAck> {
        if self.session.is_loading() {
            return Ok(self.rejected());
        }
        self.session.input = query.clone();
        self.begin_fresh_search(query)
    }

    fn handle_clear(&mut self) -> BrowseResult<SearchAck> {
        // The search-text field empties even when the fetch part is dropped.
        self.session.input.clear();
        if self.session.is_loading() {
            return Ok(self.rejected());
        }
        self.begin_fresh_search(String::new())
    }

    fn handle_continue(&mut self) -> BrowseResult<SearchAck> {
        if self.session.is_loading() {
            return Ok(self.rejected());
        }
        let Some(cursor) = self.session.cursor.clone() else {
            return Ok(self.rejected());
        };

        self.generation += 1;
        self.session.status = LoadState::Loading;
        self.inflight = Some(InflightFetch {
            generation: self.generation,
            mode: FetchMode::Continuation,
        });
        self.issue_fetch(self.session.query.clone(), Some(cursor))?;

        let _ = self
            .bus
            .publish(BrowseEvent::SearchStarted(SearchStartedPayload {
                generation: self.generation,
                view: self.session.view(),
            }));

        Ok(SearchAck {
            generation: self.generation,
            accepted: true,
        })
    }

    fn begin_fresh_search(&mut self, query: String) -> BrowseResult<SearchAck> {
        self.generation += 1;
        self.session.reset(&query);
        self.inflight = Some(InflightFetch {
            generation: self.generation,
            mode: FetchMode::Fresh,
        });
        self.issue_fetch(query, None)?;

        let _ = self
            .bus
            .publish(BrowseEvent::SearchStarted(SearchStartedPayload {
                generation: self.generation,
                view: self.session.view(),
            }));

        Ok(SearchAck {
            generation: self.generation,
            accepted: true,
        })
    }

    fn issue_fetch(&mut self, query: String, cursor: Option<String>) -> BrowseResult<()> {
        let generation = self.generation;
        self.command_tx
            .send(FetchCommand::Fetch {
                generation,
                query,
                cursor,
            })
            .map_err(|_| {
                let _ = self.event_tx.send(SearchEvent::FetchFailed {
                    generation,
                    error: "fetch sequencer stopped".to_string(),
                });
                BrowseError::Internal("fetch sequencer stopped".to_string())
            })
    }

    fn handle_fetch_finished(&mut self, generation: u64, page: Page<ListItem>) {
        let mode = match self.inflight {
            Some(InflightFetch {
                generation: inflight,
                mode,
            }) if inflight == generation => mode,
            _ => {
                tracing::warn!("dropping stale page (generation {generation})");
                return;
            }
        };
        self.inflight = None;

        match mode {
            FetchMode::Fresh => self.session.items = page.data,
            FetchMode::Continuation => self.session.items.extend(page.data),
        }
        self.session.cursor = page.cursor;
        self.session.status = LoadState::Ready;

        let _ = self
            .bus
            .publish(BrowseEvent::SearchLoaded(SearchLoadedPayload {
                generation,
                view: self.session.view(),
            }));
    }

    fn handle_fetch_failed(&mut self, generation: u64, error: &str) {
        match self.inflight {
            Some(InflightFetch {
                generation: inflight,
                ..
            }) if inflight == generation => {}
            _ => {
                tracing::warn!("dropping stale fetch failure (generation {generation})");
                return;
            }
        }
        self.inflight = None;

        // A failed continuation keeps the pages already accumulated.
        self.session.status = LoadState::Error;
        tracing::warn!("search fetch failed (generation {generation}): {error}");

        let _ = self
            .bus
            .publish(BrowseEvent::SearchFailed(SearchFailedPayload {
                generation,
                error: error.to_string(),
                view: self.session.view(),
            }));
    }

    fn rejected(&self) -> SearchAck {
        SearchAck {
            generation: self.generation,
            accepted: false,
        }
    }
}
