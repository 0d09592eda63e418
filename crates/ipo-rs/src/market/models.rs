//! Market module models.
//!
//! Index ticker entries and the service status payload.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::ipos::models::null_as_default;


/// One entry of the market index ticker (NIFTY 50, SENSEX, ...).
///
/// Price and percent are nullable on the backend; `null` reads as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[display("{} {} ({}%)", name, price, percent)]
pub struct MarketIndex {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub percent: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_positive: bool,
    /// Absolute change; not every backend version sends it.
    #[serde(default)]
    pub change: Option<f64>,
}


/// Response from `GET /`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[display("{} ({})", service, status)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub service: String,
}
