//! IPOs module models.
//!
//! Listing records as served by `GET /ipos`, the detail payload of
//! `GET /ipos/{id}`, and the sentiment vote request/response pair.

use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize};


/// Treat an explicit JSON `null` the same as an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}


/// Opaque listing identifier. The backend uses integers, but string ids are
/// accepted so the client does not depend on that.
///
/// Ordering puts every integer id before every string id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[serde(untagged)]
pub enum IpoId {
    #[display("{_0}")]
    Int(i64),
    #[display("{_0}")]
    Text(String),
}


impl From<i64> for IpoId {
    fn from(v: i64) -> Self {
        IpoId::Int(v)
    }
}


impl From<&str> for IpoId {
    fn from(v: &str) -> Self {
        match v.trim().parse::<i64>() {
            Ok(n) => IpoId::Int(n),
            Err(_) => IpoId::Text(v.trim().to_string()),
        }
    }
}


/// One point of the GMP trend series (chronological).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[display("{} @ {}", price, date)]
pub struct TrendPoint {
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
}


/// A single IPO listing.
///
/// Only `id` and `name` are required; every other field falls back to its
/// zero value when missing or `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[display("{} [{}] {} gmp={} ({}%)", name, ipo_type, status, gmp, growth_percent)]
pub struct Ipo {
    pub id: IpoId,
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub ipo_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gmp: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub growth_percent: f64,
    #[serde(default)]
    pub listing_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub trend: Vec<TrendPoint>,

    #[serde(default)]
    pub price_band: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub base_price: f64,
    #[serde(default)]
    pub lot_size: Option<u32>,
    #[serde(default)]
    pub open_date: Option<String>,
    #[serde(default)]
    pub close_date: Option<String>,
    #[serde(default)]
    pub kostak_rate: Option<f64>,
    #[serde(default)]
    pub retail_subscription_x: Option<f64>,
    #[serde(default)]
    pub allotment_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sentiment_bullish: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sentiment_bearish: u64,
}


impl Ipo {
    /// Ticker symbol when known, the company name otherwise.
    pub fn display_symbol(&self) -> &str {
        match self.symbol.as_deref() {
            Some(s) if !s.trim().is_empty() => s,
            _ => &self.name,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.status.eq_ignore_ascii_case("closed")
    }
}


/// One row of the category-wise subscription table (`Retail`, `QIB`, `NII`,
/// `Total`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Display)]
#[display("{}: {}x", category, times_subscribed)]
pub struct SubscriptionEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub times_subscribed: f64,
}


impl SubscriptionEntry {
    /// Retail individual investor bucket, under either of its usual labels.
    pub fn is_retail(&self) -> bool {
        let c = self.category.trim().to_ascii_lowercase();
        c == "rii" || c.starts_with("retail")
    }
}


/// Response from `GET /ipos/{id}`.
///
/// The listing record plus offer dates, subscription rows and GMP history.
/// The detail payload carries the latest premium as `current_gmp` rather
/// than `gmp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[display("{}", ipo)]
pub struct IpoDetail {
    #[serde(flatten)]
    pub ipo: Ipo,
    #[serde(default)]
    pub current_gmp: Option<f64>,
    #[serde(default)]
    pub issue_size: Option<String>,
    #[serde(default)]
    pub fresh_issue: Option<String>,
    #[serde(default)]
    pub offer_for_sale: Option<String>,
    #[serde(default)]
    pub allotment_date: Option<String>,
    #[serde(default)]
    pub refund_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subscriptions: Vec<SubscriptionEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gmp_history: Vec<TrendPoint>,
}


impl IpoDetail {
    /// Latest premium: `current_gmp` when sent, the listing's `gmp` otherwise.
    pub fn gmp(&self) -> f64 {
        self.current_gmp.unwrap_or(self.ipo.gmp)
    }

    /// Retail subscription multiple, from the subscription table first and
    /// the listing's `retail_subscription_x` otherwise.
    pub fn retail_subscription_x(&self) -> Option<f64> {
        self.subscriptions
            .iter()
            .find(|s| s.is_retail())
            .map(|s| s.times_subscribed)
            .or(self.ipo.retail_subscription_x)
    }
}


/// Direction of a sentiment vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    #[display("bullish")]
    Bullish,
    #[display("bearish")]
    Bearish,
}


impl std::str::FromStr for VoteType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bullish" | "bull" | "up" => Ok(VoteType::Bullish),
            "bearish" | "bear" | "down" => Ok(VoteType::Bearish),
            other => Err(format!("unknown vote type: {other}")),
        }
    }
}


/// Body of `POST /ipos/{id}/vote`.
#[derive(Debug, Clone, Serialize)]
pub struct VoteRequest {
    pub vote_type: VoteType,
}


/// Response from `POST /ipos/{id}/vote`: updated totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[display("{}: bullish={} bearish={}", status, bullish, bearish)]
pub struct VoteResponse {
    pub status: String,
    pub bullish: u64,
    pub bearish: u64,
}
