// src/report.rs
use std::fmt::Write as _;

use crossterm::style::{Color, Stylize, style};
use tracing::info;

use ipo_rs::Ipo;
use ipo_rs::ipos::models::{IpoDetail, TrendPoint, VoteResponse};
use ipo_rs::market::models::MarketIndex;
use ipo_rs::news::models::NewsItem;
use ipo_rs::predict::models::{AllotmentEstimate, ProfitEstimate};

use crate::estimate::{allotment_difficulty, bullish_pct, listing_profit};
use crate::store::Theme;
use crate::types::ViewState;

const SPARK: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// How output is styled: the saved theme, and whether colour is written at
/// all (off for pipes, files and `NO_COLOR`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Look {
    pub theme: Theme,
    pub color: bool,
}

impl Look {
    fn palette(self) -> Palette {
        match self.theme {
            Theme::Dark => Palette {
                up: Color::Green,
                down: Color::Red,
                dim: Color::DarkGrey,
                head: Color::Cyan,
            },
            Theme::Light => Palette {
                up: Color::DarkGreen,
                down: Color::DarkRed,
                dim: Color::Grey,
                head: Color::DarkBlue,
            },
        }
    }

    fn paint(self, color: Color, text: String) -> String {
        if self.color {
            style(text).with(color).to_string()
        } else {
            text
        }
    }

    fn heading(self, text: String) -> String {
        if self.color {
            style(text).with(self.palette().head).bold().to_string()
        } else {
            text
        }
    }

    fn signed(self, v: f64, text: String) -> String {
        let p = self.palette();
        let color = if v > 0.0 {
            p.up
        } else if v < 0.0 {
            p.down
        } else {
            p.dim
        };
        self.paint(color, text)
    }

    fn dim(self, text: String) -> String {
        self.paint(self.palette().dim, text)
    }
}

struct Palette {
    up: Color,
    down: Color,
    dim: Color,
    head: Color,
}

/// Tiny sparkline of the GMP trend, scaled to the series' own range.
pub fn sparkline(trend: &[TrendPoint]) -> String {
    let Some(min) = trend.iter().map(|t| t.price).reduce(f64::min) else {
        return String::new();
    };
    let max = trend.iter().map(|t| t.price).fold(min, f64::max);
    let span = max - min;
    trend
        .iter()
        .map(|t| {
            if span <= f64::EPSILON {
                SPARK[SPARK.len() / 2]
            } else {
                let idx = ((t.price - min) / span * (SPARK.len() - 1) as f64).round() as usize;
                SPARK[idx.min(SPARK.len() - 1)]
            }
        })
        .collect()
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

/// Listing table for the current projection.
pub fn render_table(rows: &[Ipo], state: &ViewState, total: usize, look: Look) -> String {
    let mut out = String::new();
    let f = &state.filters;
    let min = f.min_growth.map_or_else(|| "All".to_string(), |t| format!("{t}%"));
    let _ = writeln!(
        out,
        "{}  {}/{}  search={:?} type={} status={} min={} sort={}",
        look.heading("ACTIVE LISTINGS".to_string()),
        rows.len(),
        total,
        state.query,
        f.ipo_type.as_str(),
        f.status.as_str(),
        min,
        state.sort,
    );
    let _ = writeln!(
        out,
        "{:>5}  {:<14} {:<10} {:>10} {:>9}  {:<12} {:>9}  {:<10} TREND",
        "ID", "SYMBOL", "TYPE", "GMP", "GROWTH%", "LISTING", "PRICE", "STATUS"
    );
    for ipo in rows {
        let gmp = look.signed(ipo.gmp, format!("{:>+10.2}", ipo.gmp));
        let growth = look.signed(ipo.growth_percent, format!("{:>+8.2}%", ipo.growth_percent));
        let listing = ipo
            .listing_date
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or("TBA");
        let _ = writeln!(
            out,
            "{:>5}  {:<14} {:<10} {} {}  {:<12} {:>9.2}  {:<10} {}",
            ipo.id.to_string(),
            truncate(ipo.display_symbol(), 14),
            truncate(&ipo.ipo_type, 10),
            gmp,
            growth,
            truncate(listing, 12),
            ipo.base_price,
            truncate(&ipo.status, 10),
            sparkline(&ipo.trend),
        );
    }
    if rows.is_empty() {
        let _ = writeln!(out, "  {}", look.dim("(no listings match)".to_string()));
    }
    out
}

pub fn render_detail(detail: &IpoDetail, look: Look) -> String {
    let ipo = &detail.ipo;
    let gmp = detail.gmp();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} • {} • {}",
        look.heading(format!("{} ({})", ipo.name, ipo.display_symbol())),
        ipo.ipo_type,
        ipo.status
    );
    if let Some(band) = &ipo.price_band {
        let _ = writeln!(out, "  price band     {band}");
    }
    if let Some(size) = &detail.issue_size {
        let _ = writeln!(out, "  issue size     {size}");
    }
    let _ = writeln!(out, "  gmp            {}", look.signed(gmp, format!("{gmp:+.2}")));
    if let Some(k) = ipo.kostak_rate {
        let _ = writeln!(out, "  kostak         {k:.2}");
    }
    for (label, date) in [
        ("open", &ipo.open_date),
        ("close", &ipo.close_date),
        ("allotment", &detail.allotment_date),
        ("refunds", &detail.refund_date),
        ("listing", &ipo.listing_date),
    ] {
        if let Some(d) = date {
            let _ = writeln!(out, "  {label:<14} {d}");
        }
    }

    if !detail.subscriptions.is_empty() {
        let rows = detail
            .subscriptions
            .iter()
            .map(|s| format!("{} {:.2}x", s.category, s.times_subscribed))
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "  subscription   {rows}");
    }

    let history = if detail.gmp_history.is_empty() { &ipo.trend } else { &detail.gmp_history };
    if !history.is_empty() {
        let _ = writeln!(out, "  gmp trend      {}  ({} points)", sparkline(history), history.len());
    }

    let lot_size = ipo.lot_size.unwrap_or(0);
    let _ = writeln!(
        out,
        "  1-lot profit   {}  ({} x {} qty)",
        look.signed(gmp, format!("{:.2}", listing_profit(gmp, lot_size, 1))),
        gmp,
        lot_size,
    );
    let d = allotment_difficulty(detail.retail_subscription_x());
    let _ = writeln!(out, "  allotment      {} (difficulty {:.0}/100)", d.label, d.score);
    let _ = writeln!(
        out,
        "  sentiment      {:.0}% bullish ({} up / {} down)",
        bullish_pct(ipo.sentiment_bullish, ipo.sentiment_bearish),
        ipo.sentiment_bullish,
        ipo.sentiment_bearish,
    );
    if let Some(url) = &ipo.allotment_url {
        let _ = writeln!(out, "  allotment link {url}");
    }
    out
}

pub fn render_indices(indices: &[MarketIndex], look: Look) -> String {
    indices
        .iter()
        .map(|idx| {
            let pct = if idx.is_positive { idx.percent.abs() } else { -idx.percent.abs() };
            format!("{} {:.2} {}", idx.name, idx.price, look.signed(pct, format!("({pct:+.2}%)")))
        })
        .collect::<Vec<_>>()
        .join("  •  ")
}

pub fn render_news(news: &[NewsItem]) -> String {
    let mut out = String::new();
    for item in news {
        let day = item.published_at.get(..10).unwrap_or(&item.published_at);
        let _ = writeln!(out, "[{}] {} {}", item.source, day, item.title);
        if !item.summary.is_empty() {
            let _ = writeln!(out, "    {}", truncate(&item.summary, 100));
        }
        if !item.link.is_empty() {
            let _ = writeln!(out, "    {}", item.link);
        }
    }
    out
}

pub fn render_vote(resp: &VoteResponse) -> String {
    format!(
        "vote recorded: {} bullish / {} bearish ({:.0}% bullish)",
        resp.bullish,
        resp.bearish,
        bullish_pct(resp.bullish, resp.bearish)
    )
}

pub fn render_prediction(profit: &ProfitEstimate, allotment: &AllotmentEstimate) -> String {
    format!(
        "{}\n  est. profit   {:.2}\n  investment    {:.2}\n  allotment     {} ({})",
        profit.ipo_name,
        profit.estimated_profit,
        profit.investment_amount,
        allotment.probability,
        allotment.reasoning,
    )
}

pub fn log_view(state: &ViewState, shown: usize, total: usize) {
    info!(
        shown,
        total,
        query = %state.query,
        ipo_type = %state.filters.ipo_type.as_str(),
        status = %state.filters.status.as_str(),
        min_growth = ?state.filters.min_growth,
        sort = %state.sort,
        "view projected"
    );
}
