//! Generated listing catalogs.
//!
//! Listings are numbered from 1, so listing `n` has id `"n"` and title
//! `"App n"`. Every listing is in the `games` category.

use market_types::PAGE_SIZE;
use serde_json::{Value, json};

/// Build a catalog of `count` listings.
pub fn catalog(count: usize) -> Catalog {
    Catalog {
        listings: (1..=count).map(listing_record).collect(),
        fail_all: false,
        fail_details: false,
    }
}

/// Detail record for listing `n`, as served by the listing endpoint.
pub fn listing_record(n: usize) -> Value {
    json!({
        "id": n,
        "title": format!("App {}", n),
        "username": format!("creator{}", n % 3),
        "description": format!(
            "App {} answers questions about the weather, the markets and the \
             price of coffee, paid per request in satoshis over a micropayment \
             channel.",
            n
        ),
        "min_price": n * 100,
        "max_price": n * 200,
        "website_url": format!("https://docs.example.com/app-{}", n),
        "app_url": format!("https://app-{}.example.com", n),
        "category": "games",
        "keywords": ["games", format!("app{}", n)],
        "version": format!("1.0.{}", n),
        "updated": 1_450_000_000 + n as i64 * 60,
        "is_active": true,
        "is_up": true,
        "is_healthy": n % 2 == 1,
        "average_uptime": 0.9876,
        "quick_buy": format!("$ 21 buy https://app-{}.example.com", n),
        "usage_docs": format!("GET /app-{}/forecast", n),
    })
}

/// In-memory listing catalog answering search and detail requests.
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Vec<Value>,
    fail_all: bool,
    fail_details: bool,
}

impl Catalog {
    /// Answer every request with HTTP 500.
    pub fn failing(mut self) -> Self {
        self.fail_all = true;
        self
    }

    /// Answer detail requests with HTTP 500 while search keeps working.
    pub fn failing_details(mut self) -> Self {
        self.fail_details = true;
        self
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// `(status, body)` for a search request.
    pub fn search(&self, query: Option<&str>, page: usize) -> (u16, String) {
        if self.fail_all {
            return (500, json!({ "error": "internal" }).to_string());
        }

        let matches: Vec<&Value> = self
            .listings
            .iter()
            .filter(|listing| query.is_none_or(|q| matches_query(listing, q)))
            .collect();

        let total_pages = matches.len().div_ceil(PAGE_SIZE);
        let results: Vec<Value> = matches
            .iter()
            .skip(page * PAGE_SIZE)
            .take(PAGE_SIZE)
            .map(|listing| summary_of(listing))
            .collect();

        let body = if results.is_empty() {
            json!({ "results": null, "total_pages": 0 })
        } else {
            json!({ "results": results, "total_pages": total_pages })
        };
        (200, body.to_string())
    }

    /// `(status, body)` for a detail request.
    pub fn listing(&self, id: &str) -> (u16, String) {
        if self.fail_all || self.fail_details {
            return (500, json!({ "error": "internal" }).to_string());
        }

        self.listings
            .iter()
            .find(|listing| listing["id"].to_string() == id)
            .map(|listing| (200, listing.to_string()))
            .unwrap_or_else(|| (404, json!({ "error": "not found" }).to_string()))
    }
}

fn matches_query(listing: &Value, query: &str) -> bool {
    let query = query.to_lowercase();
    ["title", "username", "category", "description"]
        .iter()
        .filter_map(|field| listing[*field].as_str())
        .any(|text| text.to_lowercase().contains(&query))
}

fn summary_of(listing: &Value) -> Value {
    json!({
        "id": listing["id"],
        "title": listing["title"],
        "username": listing["username"],
        "min_price": listing["min_price"],
        "max_price": listing["max_price"],
        "category": listing["category"],
        "description": listing["description"],
    })
}
