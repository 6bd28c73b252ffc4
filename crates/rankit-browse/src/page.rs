use serde::{Deserialize, Serialize};

/// Data for one card in a browsable list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: u64,
    pub name: String,
    pub image: String,
}

/// One page of data from a [`PageSource`](crate::source::PageSource).
///
/// The next page can be requested using the `cursor` field. An absent cursor
/// means there is no further data; an empty `data` with a present cursor is
/// legal and means another page should still be requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, cursor: Option<String>) -> Self {
        Self { data, cursor }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            cursor: None,
        }
    }
}
