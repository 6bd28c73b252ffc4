use serde::Serialize;

use crate::page::ListItem;

/// Load state of the current search session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    Error,
}

/// One logical search: a committed query plus every page fetched for it since
/// the last reset.
///
/// `items` is the concatenation, in fetch order, of all pages fetched for
/// `query`; `cursor` is the most recently fetched page's continuation token.
/// `input` is the externally visible search-text field, which can diverge
/// from `query` (clearing the field while a fetch is loading resets `input`
/// but leaves the session untouched).
#[derive(Debug, Clone)]
pub struct SearchSession {
    pub input: String,
    pub query: String,
    pub items: Vec<ListItem>,
    pub cursor: Option<String>,
    pub status: LoadState,
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            query: String::new(),
            items: Vec::new(),
            cursor: None,
            status: LoadState::Idle,
        }
    }

    /// Replace the session wholesale for a fresh search on `query`.
    pub fn reset(&mut self, query: &str) {
        self.query = query.to_string();
        self.items.clear();
        self.cursor = None;
        self.status = LoadState::Loading;
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadState::Loading
    }

    /// Another page can be requested: the last fetch succeeded and left a
    /// continuation cursor.
    pub fn can_load_more(&self) -> bool {
        self.status == LoadState::Ready && self.cursor.is_some()
    }

    /// The search completed and matched nothing.
    pub fn is_empty(&self) -> bool {
        self.status == LoadState::Ready && self.items.is_empty()
    }

    /// A fetch is loading and nothing is on screen yet (first-load spinner,
    /// as opposed to the load-more spinner).
    pub fn is_loading_initial(&self) -> bool {
        self.status == LoadState::Loading && self.items.is_empty()
    }

    pub fn is_error(&self) -> bool {
        self.status == LoadState::Error
    }

    /// Snapshot the externally observable state.
    pub fn view(&self) -> SearchView {
        SearchView {
            input: self.input.clone(),
            query: self.query.clone(),
            items: self.items.clone(),
            status: self.status,
            can_load_more: self.can_load_more(),
            is_empty: self.is_empty(),
            is_loading_initial: self.is_loading_initial(),
            is_error: self.is_error(),
        }
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Externally observable state of the current search, derived from the
/// session with no side effects.
#[derive(Debug, Clone, Serialize)]
pub struct SearchView {
    pub input: String,
    pub query: String,
    pub items: Vec<ListItem>,
    pub status: LoadState,
    pub can_load_more: bool,
    pub is_empty: bool,
    pub is_loading_initial: bool,
    pub is_error: bool,
}
