//! Threshold classification into good/warn/bad tiers.
//!
//! Yield thresholds are inclusive (`>=`) while inventory thresholds are
//! exclusive (`>`). Both conventions are business rules; keep them as they are.

use serde::Serialize;

/// Yield at or above this is `Good`.
pub const YIELD_GOOD_MIN_PCT: f64 = 99.5;
/// Yield at or above this (and below good) is `Warn`.
pub const YIELD_WARN_MIN_PCT: f64 = 98.0;
/// Total inventory strictly above this is `Good`.
pub const INVENTORY_GOOD_ABOVE: u64 = 100;
/// Total inventory strictly above this (and not good) is `Warn`.
pub const INVENTORY_WARN_ABOVE: u64 = 20;

/// Ordered classification tier, best first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Good,
    Warn,
    Bad,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Good => "good",
            Tier::Warn => "warn",
            Tier::Bad => "bad",
        }
    }
}

impl core::fmt::Display for Tier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a yield percentage, highest tier first.
pub fn classify_yield(yield_pct: f64) -> Tier {
    if yield_pct >= YIELD_GOOD_MIN_PCT {
        Tier::Good
    } else if yield_pct >= YIELD_WARN_MIN_PCT {
        Tier::Warn
    } else {
        Tier::Bad
    }
}

/// Classify a total inventory count, highest tier first.
pub fn classify_inventory(total_inventory: u64) -> Tier {
    if total_inventory > INVENTORY_GOOD_ABOVE {
        Tier::Good
    } else if total_inventory > INVENTORY_WARN_ABOVE {
        Tier::Warn
    } else {
        Tier::Bad
    }
}

/// Render a stored yield as `"{value}%"`, without rounding.
///
/// Integral values keep one decimal place (`99.0%`), matching how the
/// dataset's float column has always been displayed.
pub fn format_yield(yield_pct: f64) -> String {
    let mut text = yield_pct.to_string();
    if yield_pct.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text.push('%');
    text
}
