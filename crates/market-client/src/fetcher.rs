use log::debug;
use market_types::Page;

use crate::client::MarketClient;
use crate::error::Result;

/// Outcome of asking the marketplace for one page of results.
#[derive(Debug, Clone, PartialEq)]
pub enum PageResult {
    Results(Page),
    /// The query matched nothing; there are no pages to navigate.
    Empty,
}

/// Fetch page `page` of the results for `query`.
///
/// Pure data operation: rendering is left to the caller.
pub fn fetch_page<C>(client: &C, query: Option<&str>, page: usize) -> Result<PageResult>
where
    C: MarketClient + ?Sized,
{
    let response = client.search(query, page)?;

    match response.into_page(page) {
        Some(page) => {
            debug!(
                "fetched page {}/{} with {} listings",
                page.index + 1,
                page.total_pages,
                page.listings.len()
            );
            Ok(PageResult::Results(page))
        }
        None => {
            debug!("no listings for query {:?}", query);
            Ok(PageResult::Empty)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use market_types::{ListingDetail, ListingId, ListingSummary, SearchResponse};

    struct StaticClient {
        response: Option<SearchResponse>,
    }

    impl MarketClient for StaticClient {
        fn search(&self, _query: Option<&str>, _page: usize) -> Result<SearchResponse> {
            self.response
                .clone()
                .ok_or_else(|| Error::request_failed("/search/", "HTTP 503"))
        }

        fn listing(&self, id: &ListingId) -> Result<ListingDetail> {
            Err(Error::request_failed(format!("/listings/{}/", id), "HTTP 404"))
        }
    }

    fn summary(id: &str) -> ListingSummary {
        ListingSummary {
            id: ListingId::new(id),
            title: "Title".to_string(),
            username: "user".to_string(),
            min_price: 1u64.into(),
            max_price: 2u64.into(),
            category: "misc".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_results_become_page() {
        let client = StaticClient {
            response: Some(SearchResponse {
                results: vec![summary("a"), summary("b")],
                total_pages: 4,
            }),
        };

        let result = fetch_page(&client, Some("games"), 3).unwrap();
        let PageResult::Results(page) = result else {
            panic!("expected results");
        };
        assert_eq!(page.index, 3);
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.listings.len(), 2);
    }

    #[test]
    fn test_no_results_is_empty() {
        let client = StaticClient {
            response: Some(SearchResponse::default()),
        };
        assert_eq!(fetch_page(&client, None, 0).unwrap(), PageResult::Empty);
    }

    #[test]
    fn test_failure_propagates() {
        let client = StaticClient { response: None };
        let err = fetch_page(&client, None, 0).unwrap_err();
        assert!(matches!(err, Error::RequestFailed { .. }));
    }
}
