use market_types::Price;
use serde::Serialize;

/// One page of search results, as shown in the results table.
#[derive(Debug, Clone, Serialize)]
pub struct ListingPageViewModel {
    /// 1-based page number.
    pub page_number: usize,
    pub total_pages: usize,
    pub query: Option<String>,
    pub rows: Vec<ListingRowViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListingRowViewModel {
    /// Global row number the user types to open the listing.
    pub row: usize,
    pub listing_id: String,
    pub title: String,
    pub creator: String,
    pub min_price: Price,
    pub max_price: Price,
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmptyResultsViewModel {
    pub query: Option<String>,
}

/// Notice printed before the first page when browsing without a query.
#[derive(Debug, Clone, Serialize)]
pub struct BrowseAllViewModel {
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListingDetailViewModel {
    pub title: String,
    pub creator: String,
    pub description: String,
    pub min_price: Price,
    pub max_price: Price,
    pub active: bool,
    pub uptime_percent: f64,
    pub docs_url: String,
    pub app_url: String,
    pub category: String,
    pub keywords: Vec<String>,
    pub version: String,
    /// Unix seconds.
    pub updated: f64,
    pub quick_start: String,
    pub usage_docs: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GuidanceViewModel {
    pub examples: Vec<UsageExample>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UsageExample {
    pub description: String,
    pub command: String,
}
