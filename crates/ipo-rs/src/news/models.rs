//! News module models.

use derive_more::Display;
use serde::{Deserialize, Serialize};


/// A single news headline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[display("[{}] {}", source, title)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    /// Timestamp string as sent by the server (RFC 3339 in practice).
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub source: String,
}
