use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::util::nullable;

/// Opaque identifier of a marketplace listing.
///
/// The service is free to use numeric or textual ids; numbers are kept in
/// their decimal string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ListingId(String);

impl ListingId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ListingId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ListingId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for ListingId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ListingId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(s),
            RawId::Number(n) => Self(n.to_string()),
        })
    }
}

/// Price as sent by the service, shown verbatim.
///
/// Whole satoshi amounts are the norm, but fractional and textual values
/// are passed through rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Whole(u64),
    Decimal(f64),
    Text(String),
}

impl Default for Price {
    fn default() -> Self {
        Price::Whole(0)
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Price::Whole(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Whole(n) => write!(f, "{}", n),
            Price::Decimal(x) => write!(f, "{}", x),
            Price::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One row of a search result page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingSummary {
    pub id: ListingId,
    pub title: String,
    pub username: String,
    #[serde(default, deserialize_with = "nullable")]
    pub min_price: Price,
    #[serde(default, deserialize_with = "nullable")]
    pub max_price: Price,
    #[serde(default, deserialize_with = "nullable")]
    pub category: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
}

/// Full record of a single listing, as returned by the detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingDetail {
    pub title: String,
    pub username: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub min_price: Price,
    #[serde(default, deserialize_with = "nullable")]
    pub max_price: Price,
    #[serde(default, deserialize_with = "nullable")]
    pub website_url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub app_url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub category: String,
    #[serde(default, deserialize_with = "nullable")]
    pub keywords: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub version: String,
    /// Last update, in unix seconds; may carry a fractional part.
    #[serde(default)]
    pub updated: f64,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_up: bool,
    #[serde(default)]
    pub is_healthy: bool,
    /// Fraction in `0.0..=1.0`.
    #[serde(default)]
    pub average_uptime: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub quick_buy: String,
    #[serde(default, deserialize_with = "nullable")]
    pub usage_docs: String,
}

impl ListingDetail {
    /// A listing only counts as available when it is enabled, reachable and
    /// passing health checks.
    pub fn is_available(&self) -> bool {
        self.is_active && self.is_up && self.is_healthy
    }

    pub fn uptime_percent(&self) -> f64 {
        self.average_uptime * 100.0
    }

    /// `None` when the timestamp is outside chrono's representable range.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        unix_seconds(self.updated)
    }
}

/// Whole-second UTC time for a possibly fractional unix timestamp, rounding
/// down. `None` for NaN, infinities and out-of-range values.
pub fn unix_seconds(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    DateTime::from_timestamp(seconds.floor() as i64, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail_json() -> serde_json::Value {
        serde_json::json!({
            "title": "Weather Oracle",
            "username": "satoshi",
            "description": "Forecasts for a fee",
            "min_price": 1000,
            "max_price": 5000,
            "website_url": "https://docs.example.com",
            "app_url": "https://app.example.com",
            "category": "data",
            "keywords": ["weather", "forecast"],
            "version": "1.2.0",
            "updated": 1_450_000_000,
            "is_active": true,
            "is_up": true,
            "is_healthy": true,
            "average_uptime": 0.98765,
            "quick_buy": "21 buy url https://app.example.com",
            "usage_docs": "GET /forecast?city=..."
        })
    }

    #[test]
    fn test_listing_id_accepts_numbers_and_strings() {
        let numeric: ListingId = serde_json::from_str("42").unwrap();
        let text: ListingId = serde_json::from_str("\"abc-1\"").unwrap();
        assert_eq!(numeric.as_str(), "42");
        assert_eq!(text.as_str(), "abc-1");
    }

    #[test]
    fn test_summary_null_description_defaults_to_empty() {
        let summary: ListingSummary = serde_json::from_value(serde_json::json!({
            "id": 7,
            "title": "Ping",
            "username": "bob",
            "min_price": 1,
            "max_price": 2,
            "category": null,
            "description": null
        }))
        .unwrap();
        assert_eq!(summary.id, ListingId::new("7"));
        assert!(summary.description.is_empty());
        assert!(summary.category.is_empty());
    }

    #[test]
    fn test_detail_availability_requires_all_flags() {
        let mut detail: ListingDetail = serde_json::from_value(detail_json()).unwrap();
        assert!(detail.is_available());

        detail.is_healthy = false;
        assert!(!detail.is_available());

        detail.is_healthy = true;
        detail.is_up = false;
        assert!(!detail.is_available());
    }

    #[test]
    fn test_detail_uptime_percent() {
        let detail: ListingDetail = serde_json::from_value(detail_json()).unwrap();
        assert!((detail.uptime_percent() - 98.765).abs() < 1e-9);
    }

    #[test]
    fn test_prices_are_passed_through() {
        let summary: ListingSummary = serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "Ping",
            "username": "bob",
            "min_price": 1.5,
            "max_price": "ask",
        }))
        .unwrap();
        assert_eq!(summary.min_price, Price::Decimal(1.5));
        assert_eq!(summary.min_price.to_string(), "1.5");
        assert_eq!(summary.max_price.to_string(), "ask");

        let whole: Price = serde_json::from_str("500").unwrap();
        assert_eq!(whole, Price::Whole(500));
        assert_eq!(serde_json::to_string(&whole).unwrap(), "500");
    }

    #[test]
    fn test_detail_accepts_fractional_timestamp() {
        let mut json = detail_json();
        json["updated"] = serde_json::json!(1_450_000_000.75);
        json["min_price"] = serde_json::json!(0.5);

        let detail: ListingDetail = serde_json::from_value(json).unwrap();
        assert_eq!(detail.updated_at().unwrap().timestamp(), 1_450_000_000);
        assert_eq!(detail.min_price.to_string(), "0.5");
    }

    #[test]
    fn test_unix_seconds_rejects_non_finite() {
        assert!(unix_seconds(f64::NAN).is_none());
        assert!(unix_seconds(f64::INFINITY).is_none());
        assert!(unix_seconds(1e30).is_none());
    }

    #[test]
    fn test_detail_updated_at() {
        let detail: ListingDetail = serde_json::from_value(detail_json()).unwrap();
        let updated = detail.updated_at().unwrap();
        assert_eq!(updated.timestamp(), 1_450_000_000);
    }
}
