//! Incremental search over cursor-paginated sources.

pub(crate) mod actor;
pub mod handle;
pub mod protocol;
pub(crate) mod sequencer;
pub mod session;
pub mod types;

pub use handle::{spawn_search_engine, SearchHandle};
pub use session::{LoadState, SearchSession, SearchView};
pub use types::SearchAck;
