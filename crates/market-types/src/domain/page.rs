use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::listing::{ListingId, ListingSummary};
use crate::util::nullable;

/// Maximum number of listings the search endpoint returns per page.
pub const PAGE_SIZE: usize = 10;

/// Raw body of the search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "nullable")]
    pub results: Vec<ListingSummary>,
    #[serde(default)]
    pub total_pages: usize,
}

impl SearchResponse {
    /// Turn the response for page `index` into a [`Page`].
    ///
    /// Returns `None` when the service reported no matches, which ends a
    /// browsing session.
    pub fn into_page(self, index: usize) -> Option<Page> {
        if self.results.is_empty() || self.total_pages == 0 {
            return None;
        }

        Some(Page {
            index,
            total_pages: self.total_pages,
            listings: self.results,
        })
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// Zero-based page index.
    pub index: usize,
    pub total_pages: usize,
    pub listings: Vec<ListingSummary>,
}

impl Page {
    /// Global, 1-based row number of the listing at `position` on this page.
    pub fn row_number(&self, position: usize) -> usize {
        self.index * PAGE_SIZE + position + 1
    }

    /// Listings paired with their row numbers, in display order.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &ListingSummary)> {
        self.listings
            .iter()
            .enumerate()
            .map(|(position, listing)| (self.row_number(position), listing))
    }
}

/// Lookup from displayed row number to listing id for the page on screen.
///
/// A map is built per page and replaced wholesale on every page change, so
/// row numbers from a previous page never resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowMap {
    rows: BTreeMap<usize, ListingId>,
}

impl RowMap {
    pub fn for_page(page: &Page) -> Self {
        let rows = page
            .rows()
            .map(|(row, listing)| (row, listing.id.clone()))
            .collect();
        Self { rows }
    }

    pub fn get(&self, row: usize) -> Option<&ListingId> {
        self.rows.get(&row)
    }

    pub fn contains(&self, row: usize) -> bool {
        self.rows.contains_key(&row)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row numbers in ascending order.
    pub fn row_numbers(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.keys().copied()
    }
}
