//! Revenue, profit margin and cost basis for a single deal.

/// Metrics computed from a game's count, price and ideal profit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    /// `count * price`
    pub revenue: f64,
    /// Ideal profit as a percentage of revenue, one decimal place.
    pub profit_margin: f64,
    /// Per-ticket cost implied by revenue minus ideal profit, three decimal places.
    pub cost_basis: f64,
}

/// Compute the derived metrics for a deal.
///
/// A zero-revenue deal has a margin of 0 and a zero-count deal has a cost
/// basis of 0. Both are valid catalog entries, not errors.
pub fn derive_metrics(count: u64, price: u64, ideal_profit: i64) -> DerivedMetrics {
    let revenue = count as f64 * price as f64;
    let profit = ideal_profit as f64;

    let profit_margin = if revenue > 0.0 {
        round_to(profit / revenue * 100.0, 1)
    } else {
        0.0
    };
    let cost_basis = if count > 0 {
        round_to((revenue - profit) / count as f64, 3)
    } else {
        0.0
    };

    DerivedMetrics {
        revenue,
        profit_margin,
        cost_basis,
    }
}

/// Round to `places` decimal places, half to even on the exact binary value.
///
/// `0.0625` is exactly representable and rounds to `0.062`; `2.675` is
/// stored slightly below the half and rounds to `2.67`. Scaling by a power
/// of ten first would perturb both cases.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}
