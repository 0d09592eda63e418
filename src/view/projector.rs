//! List projection: search, filter and sort a fetched IPO collection.
//!
//! Pure function of `(base, ViewState)`. Steps run in a fixed order:
//! search, type filter, status filter, growth threshold, sort.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate};

use ipo_rs::Ipo;

use crate::types::{Choice, SortDirection, SortKey, ViewState};

const TBA: &str = "TBA";

// Formats seen in listing dates across the scraped sources.
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%d %b %Y", "%b %d, %Y", "%d-%m-%Y", "%d/%m/%Y"];

/// Sort position of a listing date.
///
/// Variant order is the ascending order: missing first, then real dates,
/// then strings we could not parse, then the "TBA" sentinel last.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum ListingKey<'a> {
    Missing,
    Date(NaiveDate),
    Unparsed(&'a str),
    Tba,
}

fn listing_key(raw: Option<&str>) -> ListingKey<'_> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return ListingKey::Missing;
    };
    if raw.eq_ignore_ascii_case(TBA) {
        return ListingKey::Tba;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return ListingKey::Date(dt.date_naive());
    }
    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(raw, f).ok())
        .map_or(ListingKey::Unparsed(raw), ListingKey::Date)
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Natural ordering of one column. Missing values use the column's zero:
/// `0` for numbers, `""` for strings, name for symbol.
fn compare(a: &Ipo, b: &Ipo, key: SortKey) -> Ordering {
    match key {
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Symbol => a.display_symbol().cmp(b.display_symbol()),
        SortKey::Type => a.ipo_type.cmp(&b.ipo_type),
        SortKey::Status => a.status.cmp(&b.status),
        SortKey::Gmp => cmp_f64(a.gmp, b.gmp),
        SortKey::GrowthPercent => cmp_f64(a.growth_percent, b.growth_percent),
        SortKey::ListingDate => {
            listing_key(a.listing_date.as_deref()).cmp(&listing_key(b.listing_date.as_deref()))
        }
        SortKey::BasePrice => cmp_f64(a.base_price, b.base_price),
        SortKey::LotSize => a.lot_size.unwrap_or(0).cmp(&b.lot_size.unwrap_or(0)),
    }
}

fn matches_query(ipo: &Ipo, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    ipo.name.to_lowercase().contains(needle)
        || ipo
            .symbol
            .as_deref()
            .is_some_and(|s| s.to_lowercase().contains(needle))
}

fn matches_type(ipo: &Ipo, choice: &Choice) -> bool {
    match choice {
        Choice::All => true,
        Choice::Only(v) => ipo.ipo_type == *v,
    }
}

fn matches_status(ipo: &Ipo, choice: &Choice) -> bool {
    match choice {
        Choice::All => true,
        Choice::Only(v) => ipo.status.to_lowercase() == v.to_lowercase(),
    }
}

fn matches_growth(ipo: &Ipo, min: Option<u32>) -> bool {
    match min {
        Some(t) if t > 0 => ipo.growth_percent >= f64::from(t),
        _ => true,
    }
}

/// Derive the displayed rows from the fetched collection.
///
/// Always returns a fresh vector. Equal rows keep their base order (stable sort).
pub fn project(base: &[Ipo], state: &ViewState) -> Vec<Ipo> {
    let needle = state.query.to_lowercase();
    let filters = &state.filters;

    let mut rows: Vec<Ipo> = base
        .iter()
        .filter(|ipo| matches_query(ipo, &needle))
        .filter(|ipo| matches_type(ipo, &filters.ipo_type))
        .filter(|ipo| matches_status(ipo, &filters.status))
        .filter(|ipo| matches_growth(ipo, filters.min_growth))
        .cloned()
        .collect();

    let sort = state.sort;
    rows.sort_by(|a, b| {
        let ord = compare(a, b, sort.key);
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    rows
}
