use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail, Result};

use ipo_rs::IpoId;
use ipo_rs::ipos::models::VoteType;
use ipo_rs::predict::models::Category;

/// Literal used by every categorical control for "no constraint".
pub const ALL: &str = "All";

/// A categorical filter value: either unconstrained or one exact value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Choice {
    #[default]
    All,
    Only(String),
}

impl Choice {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == ALL {
            Choice::All
        } else {
            Choice::Only(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Choice::All => ALL,
            Choice::Only(v) => v,
        }
    }
}

/// Parse the growth-threshold control value.
///
/// `"All"`, `"0"` and anything that is not a non-negative integer all mean
/// "no constraint". Treating `"0"` like `"All"` matches the web dashboard.
pub fn parse_min_growth(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw == ALL {
        return None;
    }
    match raw.parse::<u32>() {
        Ok(n) if n > 0 => Some(n),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Filters {
    pub ipo_type: Choice,
    pub status: Choice,
    pub min_growth: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Id,
    Name,
    Symbol,
    Type,
    Status,
    Gmp,
    GrowthPercent,
    ListingDate,
    BasePrice,
    LotSize,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Name => "name",
            SortKey::Symbol => "symbol",
            SortKey::Type => "type",
            SortKey::Status => "status",
            SortKey::Gmp => "gmp",
            SortKey::GrowthPercent => "growth_percent",
            SortKey::ListingDate => "listing_date",
            SortKey::BasePrice => "base_price",
            SortKey::LotSize => "lot_size",
        }
    }
}

impl FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = match s.trim().to_ascii_lowercase().as_str() {
            "id" => SortKey::Id,
            "name" => SortKey::Name,
            "symbol" => SortKey::Symbol,
            "type" => SortKey::Type,
            "status" => SortKey::Status,
            "gmp" => SortKey::Gmp,
            "growth_percent" | "growth" => SortKey::GrowthPercent,
            "listing_date" | "listing" | "date" => SortKey::ListingDate,
            "base_price" | "price" => SortKey::BasePrice,
            "lot_size" | "lot" => SortKey::LotSize,
            other => bail!("unknown sort key: {other}"),
        };
        Ok(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn flip(self) -> SortDirection {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => bail!("unknown sort direction: {other}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for Sort {
    fn default() -> Self {
        Self {
            key: SortKey::ListingDate,
            direction: SortDirection::Desc,
        }
    }
}

impl FromStr for Sort {
    type Err = anyhow::Error;

    /// `"<key>"` or `"<key>:<asc|desc>"`.
    fn from_str(s: &str) -> Result<Self> {
        let (key, dir) = match s.split_once(':') {
            Some((k, d)) => (k, Some(d)),
            None => (s, None),
        };
        Ok(Sort {
            key: key.parse()?,
            direction: dir.map(str::parse::<SortDirection>).transpose()?.unwrap_or_default(),
        })
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key.as_str(), self.direction.as_str())
    }
}

/// Everything the list projection depends on besides the base collection.
///
/// Value type: every control change produces a new state via
/// [`ViewState::reduce`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub query: String,
    pub filters: Filters,
    pub sort: Sort,
}

/// A change coming from one of the view controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Search(String),
    FilterType(Choice),
    FilterStatus(Choice),
    /// Raw threshold control value, parsed with [`parse_min_growth`].
    MinGrowth(String),
    /// Column header click: same key toggles direction, a new key starts descending.
    SortBy(SortKey),
    SortExplicit(Sort),
    Reset,
}

impl ViewState {
    pub fn with_sort(sort: Sort) -> Self {
        Self {
            sort,
            ..Self::default()
        }
    }

    pub fn reduce(&self, event: ViewEvent) -> ViewState {
        let mut next = self.clone();
        match event {
            ViewEvent::Search(q) => next.query = q,
            ViewEvent::FilterType(c) => next.filters.ipo_type = c,
            ViewEvent::FilterStatus(c) => next.filters.status = c,
            ViewEvent::MinGrowth(raw) => next.filters.min_growth = parse_min_growth(&raw),
            ViewEvent::SortBy(key) => {
                next.sort = if self.sort.key == key {
                    Sort {
                        key,
                        direction: self.sort.direction.flip(),
                    }
                } else {
                    Sort {
                        key,
                        direction: SortDirection::Desc,
                    }
                };
            }
            ViewEvent::SortExplicit(sort) => next.sort = sort,
            ViewEvent::Reset => next = ViewState::with_sort(self.sort),
        }
        next
    }
}

/// Commands typed at the dashboard prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    View(ViewEvent),
    Refresh,
    Show(IpoId),
    Vote(IpoId, VoteType),
    Predict {
        id: IpoId,
        lots: u32,
        category: Category,
    },
    News,
    Indices,
    Theme,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((v, r)) => (v, r.trim()),
            None => (line, ""),
        };
        let args: Vec<&str> = rest.split_whitespace().collect();

        let cmd = match verb.to_ascii_lowercase().as_str() {
            "search" | "/" => Command::View(ViewEvent::Search(rest.to_string())),
            "type" => Command::View(ViewEvent::FilterType(Choice::parse(rest))),
            "status" => Command::View(ViewEvent::FilterStatus(Choice::parse(rest))),
            "min" | "gmp" => Command::View(ViewEvent::MinGrowth(rest.to_string())),
            "sort" => match args.as_slice() {
                [key] => Command::View(ViewEvent::SortBy(key.parse()?)),
                [key, dir] => Command::View(ViewEvent::SortExplicit(Sort {
                    key: key.parse()?,
                    direction: dir.parse()?,
                })),
                _ => bail!("usage: sort <key> [asc|desc]"),
            },
            "reset" => Command::View(ViewEvent::Reset),
            "refresh" | "r" => Command::Refresh,
            "show" => match args.as_slice() {
                [id] => Command::Show(IpoId::from(*id)),
                _ => bail!("usage: show <id>"),
            },
            "vote" => match args.as_slice() {
                [id, kind] => Command::Vote(IpoId::from(*id), kind.parse().map_err(|e: String| anyhow!(e))?),
                _ => bail!("usage: vote <id> <bullish|bearish>"),
            },
            "predict" => {
                let (id, lots, category) = match args.as_slice() {
                    [id, lots] => (id, lots, Category::default()),
                    [id, lots, cat] => (id, lots, cat.parse().map_err(|e: String| anyhow!(e))?),
                    _ => bail!("usage: predict <id> <lots> [RII|HNI]"),
                };
                let lots: u32 = lots.parse().map_err(|_| anyhow!("lots must be a whole number"))?;
                if lots == 0 {
                    bail!("lots must be at least 1");
                }
                Command::Predict {
                    id: IpoId::from(*id),
                    lots,
                    category,
                }
            }
            "news" => Command::News,
            "indices" | "ticker" => Command::Indices,
            "theme" => Command::Theme,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            "" => bail!("empty command"),
            other => bail!("unknown command: {other} (try `help`)"),
        };
        Ok(cmd)
    }
}

pub const HELP: &str = "\
commands:
  search [text]              filter by name/symbol (empty clears)
  type <All|Mainboard|SME>   filter by listing type
  status <All|Open|...>      filter by status (case-insensitive)
  min <All|n>                minimum growth %
  sort <key> [asc|desc]      sort; repeating a key flips direction
  reset                      clear search and filters
  refresh                    refetch listings
  show <id>                  listing detail
  vote <id> <bullish|bearish>
  predict <id> <lots> [RII|HNI]
  news | indices | theme | help | quit";
