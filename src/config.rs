use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::warn;

use crate::types::Sort;

/// Dashboard settings.
///
/// Defaults suit a tracker backend running locally; every field can be
/// overridden from the environment (a `.env` file is honoured).
#[derive(Debug, Clone)]
pub struct Config {
    // Base URL of the tracker API.
    pub api_url: String,

    // How often the listing collection is refetched.
    pub refresh_ms: u64,

    // How often the index ticker is refetched (the web ticker used 30s).
    pub ticker_refresh_ms: u64,

    // Local state: per-IPO vote flags and the theme preference. An empty
    // `IPO_VOTES_FILE` keeps vote flags in memory only.
    pub votes_file: Option<PathBuf>,
    pub prefs_file: PathBuf,

    // Sort applied when the view mounts.
    pub default_sort: Sort,

    // Colour output; `NO_COLOR` turns it off, and main also drops it when
    // stdout is not a terminal.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000".to_string(),
            refresh_ms: 60_000,
            ticker_refresh_ms: 30_000,
            votes_file: Some(PathBuf::from(".ipo-dashboard/votes.json")),
            prefs_file: PathBuf::from(".ipo-dashboard/prefs.json"),
            default_sort: Sort::default(),
            color: true,
        }
    }
}

fn parse_or_keep<T: FromStr>(key: &str, raw: Option<String>, current: T) -> T {
    match raw {
        Some(v) => v.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %v, "invalid config value, keeping default");
            current
        }),
        None => current,
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|k| env::var(k).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();
        Self {
            api_url: lookup("IPO_API_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(d.api_url),
            refresh_ms: parse_or_keep("IPO_REFRESH_MS", lookup("IPO_REFRESH_MS"), d.refresh_ms)
                .max(1),
            ticker_refresh_ms: parse_or_keep(
                "IPO_TICKER_REFRESH_MS",
                lookup("IPO_TICKER_REFRESH_MS"),
                d.ticker_refresh_ms,
            )
            .max(1),
            votes_file: match lookup("IPO_VOTES_FILE") {
                Some(v) if v.trim().is_empty() => None,
                Some(v) => Some(PathBuf::from(v)),
                None => d.votes_file,
            },
            prefs_file: lookup("IPO_PREFS_FILE").map(PathBuf::from).unwrap_or(d.prefs_file),
            default_sort: parse_or_keep("IPO_DEFAULT_SORT", lookup("IPO_DEFAULT_SORT"), d.default_sort),
            color: lookup("NO_COLOR").is_none_or(|v| v.is_empty()),
        }
    }
}
