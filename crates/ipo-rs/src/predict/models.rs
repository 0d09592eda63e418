//! Predict module models.
//!
//! Request/response pairs for the server-side profit and allotment
//! estimators. The client displays the results as returned.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::ipos::models::IpoId;


/// Investor category used by the allotment estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
pub enum Category {
    /// Retail individual investor.
    #[default]
    #[serde(rename = "RII")]
    #[display("RII")]
    Retail,
    /// High net-worth individual.
    #[serde(rename = "HNI")]
    #[display("HNI")]
    Hni,
}


impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RII" | "RETAIL" => Ok(Category::Retail),
            "HNI" | "NII" => Ok(Category::Hni),
            other => Err(format!("unknown category: {other}")),
        }
    }
}


/// Body of `POST /predict/profit`.
#[derive(Debug, Clone, Serialize)]
pub struct ProfitRequest {
    pub ipo_id: IpoId,
    pub lots: u32,
}


/// Response from `POST /predict/profit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[display("{}: profit {} on {} invested", ipo_name, estimated_profit, investment_amount)]
pub struct ProfitEstimate {
    pub ipo_name: String,
    pub estimated_profit: f64,
    pub investment_amount: f64,
    #[serde(default)]
    pub gmp: f64,
    #[serde(default)]
    pub lot_size: u32,
    #[serde(default)]
    pub lots: u32,
}


/// Body of `POST /predict/allotment`.
#[derive(Debug, Clone, Serialize)]
pub struct AllotmentRequest {
    pub ipo_id: IpoId,
    pub category: Category,
    pub lots_applied: u32,
}


/// Response from `POST /predict/allotment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[display("{}: {} ({})", ipo_name, probability, reasoning)]
pub struct AllotmentEstimate {
    pub ipo_name: String,
    pub probability: String,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub category: String,
}
