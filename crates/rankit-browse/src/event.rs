use serde::Serialize;

use crate::search::SearchView;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "payload")]
pub enum BrowseEvent {
    SearchStarted(SearchStartedPayload),
    SearchLoaded(SearchLoadedPayload),
    SearchFailed(SearchFailedPayload),
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchStartedPayload {
    pub generation: u64,
    pub view: SearchView,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchLoadedPayload {
    pub generation: u64,
    pub view: SearchView,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchFailedPayload {
    pub generation: u64,
    pub error: String,
    pub view: SearchView,
}
