use crate::error::{BrowseError, BrowseResult};
use crate::page::{ListItem, Page};

pub const DEFAULT_PAGE_SIZE: usize = 32;

/// A data source the search engine can page through.
///
/// `cursor` presence in the returned page is the sole end-of-data signal.
#[async_trait::async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(
        &self,
        search: &str,
        cursor: Option<&str>,
    ) -> BrowseResult<Page<ListItem>>;
}

/// In-memory catalog source.
///
/// Filters items by case-sensitive substring match on the name and pages
/// through the filtered set with a numeric offset cursor.
pub struct MemorySource {
    items: Vec<ListItem>,
    page_size: usize,
}

impl MemorySource {
    pub fn new(items: Vec<ListItem>) -> Self {
        Self {
            items,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }
}

#[async_trait::async_trait]
impl PageSource for MemorySource {
    async fn fetch_page(
        &self,
        search: &str,
        cursor: Option<&str>,
    ) -> BrowseResult<Page<ListItem>> {
        let offset = match cursor {
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|_| BrowseError::FetchFailed(format!("invalid cursor: {raw}")))?,
            None => 0,
        };

        let filtered: Vec<&ListItem> = self
            .items
            .iter()
            .filter(|item| item.name.contains(search))
            .collect();

        let end = offset.saturating_add(self.page_size).min(filtered.len());
        let data = filtered
            .get(offset..end)
            .unwrap_or(&[])
            .iter()
            .map(|item| (*item).clone())
            .collect();
        let next_cursor = (end < filtered.len()).then(|| end.to_string());

        Ok(Page::new(data, next_cursor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(count: u64) -> Vec<ListItem> {
        (0..count)
            .map(|id| ListItem {
                id,
                name: if id % 2 == 0 {
                    format!("Movies {id}")
                } else {
                    format!("TV Shows {id}")
                },
                image: "/images/categories/movies.jpg".to_string(),
            })
            .collect()
    }

    #[tokio::test]
    async fn first_page_has_cursor_when_more_remain() {
        let source = MemorySource::new(catalog(10)).with_page_size(4);

        let page = source.fetch_page("", None).await.expect("page");

        assert_eq!(page.data.len(), 4);
        assert_eq!(page.cursor.as_deref(), Some("4"));
    }

    #[tokio::test]
    async fn last_page_has_no_cursor() {
        let source = MemorySource::new(catalog(10)).with_page_size(4);

        let page = source.fetch_page("", Some("8")).await.expect("page");

        assert_eq!(page.data.len(), 2);
        assert!(page.cursor.is_none());
    }

    #[tokio::test]
    async fn exact_page_boundary_ends_pagination() {
        let source = MemorySource::new(catalog(8)).with_page_size(4);

        let page = source.fetch_page("", Some("4")).await.expect("page");

        assert_eq!(page.data.len(), 4);
        assert!(page.cursor.is_none(), "no cursor when the page drains the set");
    }

    #[tokio::test]
    async fn search_filters_by_substring() {
        let source = MemorySource::new(catalog(10)).with_page_size(32);

        let page = source.fetch_page("TV", None).await.expect("page");

        assert_eq!(page.data.len(), 5);
        assert!(page.data.iter().all(|item| item.name.starts_with("TV Shows")));
        assert!(page.cursor.is_none());
    }

    #[tokio::test]
    async fn unmatched_search_returns_empty_page() {
        let source = MemorySource::new(catalog(10));

        let page = source.fetch_page("zzz", None).await.expect("page");

        assert!(page.data.is_empty());
        assert!(page.cursor.is_none());
    }

    #[tokio::test]
    async fn invalid_cursor_fails_fetch() {
        let source = MemorySource::new(catalog(10));

        let result = source.fetch_page("", Some("not-a-number")).await;

        assert!(matches!(result, Err(BrowseError::FetchFailed(_))));
    }

    #[tokio::test]
    async fn cursor_past_end_returns_empty_final_page() {
        let source = MemorySource::new(catalog(4)).with_page_size(4);

        let page = source.fetch_page("", Some("100")).await.expect("page");

        assert!(page.data.is_empty());
        assert!(page.cursor.is_none());
    }
}
