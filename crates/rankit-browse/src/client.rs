use std::env;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{BrowseError, BrowseResult};
use crate::page::{ListItem, Page};
use crate::source::PageSource;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub struct ApiSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ApiSettings {
    pub fn from_env() -> Self {
        let base_url = env::var("RANKIT_API_BASE_URL")
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout_secs = env::var("RANKIT_API_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            timeout_secs,
        }
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// JSON client for the rankit API's paginated list endpoints.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(settings: ApiSettings) -> BrowseResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| BrowseError::Internal(format!("failed to build http client: {e}")))?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub async fn things(
        &self,
        search: &str,
        cursor: Option<&str>,
    ) -> BrowseResult<Page<ListItem>> {
        self.get_page("thing", search, cursor).await
    }

    pub async fn categories(
        &self,
        search: &str,
        cursor: Option<&str>,
    ) -> BrowseResult<Page<ListItem>> {
        self.get_page("category", search, cursor).await
    }

    async fn get_page(
        &self,
        path: &str,
        search: &str,
        cursor: Option<&str>,
    ) -> BrowseResult<Page<ListItem>> {
        let url = page_url(&self.base_url, path, search, cursor);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| BrowseError::FetchFailed(format!("request to /{path} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BrowseError::FetchFailed(format!(
                "/{path} returned {status}"
            )));
        }

        response
            .json::<Page<ListItem>>()
            .await
            .map_err(|e| BrowseError::FetchFailed(format!("invalid /{path} page body: {e}")))
    }
}

fn page_url(base_url: &str, path: &str, search: &str, cursor: Option<&str>) -> String {
    let mut url = format!(
        "{base_url}/{path}?search={}",
        urlencoding::encode(search)
    );
    if let Some(cursor) = cursor {
        url.push_str("&cursor=");
        url.push_str(&urlencoding::encode(cursor));
    }
    url
}

/// The thing list endpoint as a [`PageSource`].
pub struct ThingSource {
    client: Arc<ApiClient>,
}

impl ThingSource {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl PageSource for ThingSource {
    async fn fetch_page(
        &self,
        search: &str,
        cursor: Option<&str>,
    ) -> BrowseResult<Page<ListItem>> {
        self.client.things(search, cursor).await
    }
}

/// The category list endpoint as a [`PageSource`].
pub struct CategorySource {
    client: Arc<ApiClient>,
}

impl CategorySource {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl PageSource for CategorySource {
    async fn fetch_page(
        &self,
        search: &str,
        cursor: Option<&str>,
    ) -> BrowseResult<Page<ListItem>> {
        self.client.categories(search, cursor).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_without_cursor() {
        assert_eq!(
            page_url("http://localhost:8080", "thing", "", None),
            "http://localhost:8080/thing?search="
        );
    }

    #[test]
    fn page_url_encodes_search_and_cursor() {
        assert_eq!(
            page_url("http://localhost:8080", "category", "tv shows & more", Some("32")),
            "http://localhost:8080/category?search=tv%20shows%20%26%20more&cursor=32"
        );
    }

    #[test]
    fn settings_default_to_local_api() {
        let settings = ApiSettings::default();
        assert_eq!(settings.base_url, "http://localhost:8080");
        assert_eq!(settings.timeout_secs, 30);
    }

    #[test]
    fn client_trims_trailing_slash() {
        let client = ApiClient::new(ApiSettings {
            base_url: "http://localhost:8080/".to_string(),
            timeout_secs: 5,
        })
        .expect("client");
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
