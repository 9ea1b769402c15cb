pub mod calculator;
pub mod tiers;
pub mod types;

pub use calculator::{calculate_breakdown, calculate_log_cost, calculate_user_cost};
pub use tiers::{DEFAULT_TABLE, DEFAULT_USER_PRICE};
pub use types::{CostBreakdown, PricingTable, PricingTier};
