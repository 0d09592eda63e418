//! IPO tracker Rust client
//!
//! Typed client for the IPO tracker HTTP API.
//! Provides listing and detail retrieval, market index and news feeds,
//! sentiment voting and the profit/allotment predictors.
//!
//! # Quick Start
//!
//! ```no_run
//! use ipo_rs::IpoClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = IpoClient::new_with_config(Some("http://localhost:8000".to_string()));
//!
//! let ipos = client.get_ipos().await?;
//! println!("Found {} IPOs", ipos.len());
//! # Ok(())
//! # }
//! ```
//!
//! # API Endpoint Modules
//!
//! - [`ipos`] - Listings, detail, sentiment votes
//! - [`market`] - Market index ticker
//! - [`news`] - News feed
//! - [`predict`] - Profit and allotment estimators
//!
//! All endpoint methods are implemented on [`IpoClient`].


// Core modules
pub mod client;         // Main HTTP client
pub mod errors;         // Error types
pub(crate) mod helpers; // Internal HTTP helpers


// API endpoint modules
pub mod ipos;       // Listings, detail and votes
pub mod market;     // Market indices
pub mod news;       // News feed
pub mod predict;    // Profit / allotment predictors


// Re-exports for convenient access
pub use client::IpoClient;
pub use errors::IpoError;
pub use ipos::models::{Ipo, IpoId};
