//! Marketplace client trait and `reqwest`-backed implementation.

use log::debug;
use market_types::{ListingDetail, ListingId, SearchResponse};
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{Error, Result};

/// Access to the marketplace search and listing endpoints.
pub trait MarketClient {
    /// Fetch page `page` (zero-based) of listings matching `query`.
    /// `None` lists every listing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestFailed`] on transport, status or decode failure.
    fn search(&self, query: Option<&str>, page: usize) -> Result<SearchResponse>;

    /// Fetch the full record of a single listing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestFailed`] on transport, status or decode failure.
    fn listing(&self, id: &ListingId) -> Result<ListingDetail>;
}

/// Blocking HTTP implementation of [`MarketClient`].
#[derive(Debug, Clone)]
pub struct HttpMarketClient {
    base_url: String,
    username: Option<String>,
    token: Option<String>,
    http: Client,
}

impl HttpMarketClient {
    /// Create a new client targeting `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("market/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            username: None,
            token: None,
            http,
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let mut client = Self::new(config.url.clone())?;
        client.username = config.username.clone();
        client.token = config.token.clone();
        Ok(client)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        match &self.username {
            Some(username) => request.header("X-Market-User", username),
            None => request,
        }
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, String)]) -> Result<T> {
        debug!("GET {} {:?}", url, query);

        let response = self
            .authorize(self.http.get(url).query(query))
            .send()
            .map_err(|e| Error::request_failed(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::request_failed(url, format!("HTTP {}", status)));
        }

        response
            .json()
            .map_err(|e| Error::request_failed(url, format!("invalid response body: {}", e)))
    }
}

impl MarketClient for HttpMarketClient {
    fn search(&self, query: Option<&str>, page: usize) -> Result<SearchResponse> {
        let url = format!("{}/search/", self.base_url);

        let mut params = vec![("page", page.to_string())];
        if let Some(q) = query {
            params.push(("q", q.to_string()));
        }

        self.get_json(&url, &params)
    }

    fn listing(&self, id: &ListingId) -> Result<ListingDetail> {
        let url = format!("{}/listings/{}/", self.base_url, id);
        self.get_json(&url, &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use market_testing::{MockMarket, fixtures};

    #[test]
    fn test_search_sends_page_and_query() {
        let server = MockMarket::start(fixtures::catalog(25));
        let client = HttpMarketClient::new(server.url()).unwrap();

        let response = client.search(Some("games"), 1).unwrap();
        assert_eq!(response.total_pages, 3);
        assert_eq!(response.results.len(), 10);
        assert_eq!(response.results[0].id, ListingId::new("11"));

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].starts_with("/search/?"));
        assert!(requests[0].contains("page=1"));
        assert!(requests[0].contains("q=games"));
    }

    #[test]
    fn test_search_without_query_omits_q() {
        let server = MockMarket::start(fixtures::catalog(3));
        let client = HttpMarketClient::new(server.url()).unwrap();

        client.search(None, 0).unwrap();
        let requests = server.requests();
        assert!(!requests[0].contains("q="));
    }

    #[test]
    fn test_listing_detail() {
        let server = MockMarket::start(fixtures::catalog(3));
        let client = HttpMarketClient::new(server.url()).unwrap();

        let detail = client.listing(&ListingId::new("2")).unwrap();
        assert_eq!(detail.title, "App 2");
        assert_eq!(server.requests(), vec!["/listings/2/".to_string()]);
    }

    #[test]
    fn test_unknown_listing_is_request_failure() {
        let server = MockMarket::start(fixtures::catalog(3));
        let client = HttpMarketClient::new(server.url()).unwrap();

        let err = client.listing(&ListingId::new("999")).unwrap_err();
        assert!(matches!(err, Error::RequestFailed { .. }));
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_server_error_is_request_failure() {
        let server = MockMarket::start(fixtures::catalog(3).failing());
        let client = HttpMarketClient::new(server.url()).unwrap();

        let err = client.search(None, 0).unwrap_err();
        assert!(matches!(err, Error::RequestFailed { .. }));
    }

    #[test]
    fn test_unreachable_host_is_request_failure() {
        let client = HttpMarketClient::new("http://127.0.0.1:1").unwrap();
        let err = client.search(None, 0).unwrap_err();
        assert!(matches!(err, Error::RequestFailed { .. }));
    }

    #[test]
    fn test_credentials_are_sent() {
        let server = MockMarket::start(fixtures::catalog(3));
        let client = HttpMarketClient::from_config(&ApiConfig {
            url: server.url(),
            username: Some("alice".to_string()),
            token: Some("t0ken".to_string()),
        })
        .unwrap();

        client.search(None, 0).unwrap();
        let headers = server.last_headers();
        assert!(headers.iter().any(|h| h.eq_ignore_ascii_case("authorization: Bearer t0ken")));
        assert!(headers.iter().any(|h| h.eq_ignore_ascii_case("x-market-user: alice")));
    }
}
