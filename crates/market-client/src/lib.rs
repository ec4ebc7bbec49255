//! Client side of the marketplace: HTTP access to the search and listing
//! endpoints, page fetching for the browse loop, and client configuration.

pub mod client;
pub mod config;
pub mod error;
pub mod fetcher;

pub use client::{HttpMarketClient, MarketClient};
pub use config::{ApiConfig, Config, DEFAULT_API_URL};
pub use error::{Error, Result};
pub use fetcher::{PageResult, fetch_page};
