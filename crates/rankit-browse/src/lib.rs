pub mod bus;
pub mod client;
pub mod error;
pub mod event;
pub mod page;
pub mod search;
pub mod source;
pub mod validate;

pub use crate::bus::Bus;
pub use crate::client::{ApiClient, ApiSettings, CategorySource, ThingSource};
pub use crate::error::{BrowseError, BrowseResult};
pub use crate::event::BrowseEvent;
pub use crate::page::{ListItem, Page};
pub use crate::search::{spawn_search_engine, LoadState, SearchAck, SearchHandle, SearchView};
pub use crate::source::{MemorySource, PageSource};
