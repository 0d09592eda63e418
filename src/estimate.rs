//! Local estimators shown on the detail card. Server-side predictions are
//! displayed as returned and never recomputed here.

/// Subscription multiple at which allotment is treated as a pure lottery.
pub const LOTTERY_SUBSCRIPTION_X: f64 = 50.0;
/// Below this multiple allotment is likely.
pub const EASY_SUBSCRIPTION_X: f64 = 5.0;

/// Listing gain for `lots` lots at the current premium.
pub fn listing_profit(gmp: f64, lot_size: u32, lots: u32) -> f64 {
    gmp * f64::from(lot_size) * f64::from(lots)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    /// 0 (easy) to 100 (lottery).
    pub score: f64,
    pub label: &'static str,
}

/// Allotment difficulty from the retail subscription multiple.
/// Unknown or non-positive multiples count as 1x.
pub fn allotment_difficulty(retail_subscription_x: Option<f64>) -> Difficulty {
    let sub_x = retail_subscription_x.filter(|x| *x > 0.0).unwrap_or(1.0);
    let score = (sub_x * 100.0 / LOTTERY_SUBSCRIPTION_X).min(100.0);
    let label = if sub_x < EASY_SUBSCRIPTION_X {
        "High Chance (Easy)"
    } else if sub_x > LOTTERY_SUBSCRIPTION_X {
        "Lottery (Hard)"
    } else {
        "Moderate"
    };
    Difficulty { score, label }
}

/// Share of bullish votes in percent; an even split when nobody voted.
pub fn bullish_pct(bullish: u64, bearish: u64) -> f64 {
    let total = bullish + bearish;
    if total == 0 {
        50.0
    } else {
        bullish as f64 / total as f64 * 100.0
    }
}
