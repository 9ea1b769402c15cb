use crate::billing::{CostBreakdown, PricingTable};

/// Calculate the tiered cost for a log volume
///
/// Walks the tiers in ascending order, filling each one before spilling into
/// the next. The final tier is unbounded, so the function is total over all
/// inputs; no rounding is applied here.
pub fn calculate_log_cost(log_count: u64, table: &PricingTable) -> f64 {
    let mut remaining = log_count;
    let mut cost = 0.0;

    for tier in table.tiers() {
        if remaining == 0 {
            break;
        }
        let consumed = match tier.width() {
            Some(width) => remaining.min(width),
            None => remaining,
        };
        cost += consumed as f64 * tier.rate;
        remaining -= consumed;
    }

    cost
}

/// Calculate the flat per-user cost
pub fn calculate_user_cost(user_count: u64, user_price: f64) -> f64 {
    user_count as f64 * user_price
}

/// Calculate the full monthly breakdown for a log volume and user count
pub fn calculate_breakdown(
    log_count: u64,
    user_count: u64,
    table: &PricingTable,
    user_price: f64,
) -> CostBreakdown {
    CostBreakdown::new(
        calculate_log_cost(log_count, table),
        calculate_user_cost(user_count, user_price),
    )
}
