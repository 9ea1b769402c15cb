use serde::{Deserialize, Serialize};

/// A contiguous volume range billed at a single per-unit rate
///
/// The range is half-open: `[lower, upper)`. `upper == None` marks the
/// unbounded final tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    pub lower: u64,
    pub upper: Option<u64>,
    pub rate: f64,
}

impl PricingTier {
    /// Number of units this tier can absorb, `None` for the unbounded tier
    pub fn width(&self) -> Option<u64> {
        self.upper.map(|upper| upper.saturating_sub(self.lower))
    }

    pub fn is_unbounded(&self) -> bool {
        self.upper.is_none()
    }
}

/// An ordered, validated list of pricing tiers
///
/// Construction goes through [`PricingTable::new`], so any table handed to
/// the calculator is known to start at zero, be contiguous without gaps or
/// overlaps, and end in exactly one unbounded tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PricingTier>", into = "Vec<PricingTier>")]
pub struct PricingTable {
    tiers: Vec<PricingTier>,
}

impl PricingTable {
    pub fn new(tiers: Vec<PricingTier>) -> Result<Self, String> {
        Self::validate(&tiers)?;
        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[PricingTier] {
        &self.tiers
    }

    fn validate(tiers: &[PricingTier]) -> Result<(), String> {
        let Some(first) = tiers.first() else {
            return Err("Pricing table must contain at least one tier".to_string());
        };

        if first.lower != 0 {
            return Err(format!(
                "First tier must start at 0, found lower bound {}",
                first.lower
            ));
        }

        for (i, tier) in tiers.iter().enumerate() {
            if !tier.rate.is_finite() || tier.rate < 0.0 {
                return Err(format!(
                    "Tier {} has invalid rate {} (must be finite and non-negative)",
                    i, tier.rate
                ));
            }

            match (tier.upper, tiers.get(i + 1)) {
                // Interior tiers must be non-empty and butt up against the next one
                (Some(upper), Some(next)) => {
                    if upper <= tier.lower {
                        return Err(format!(
                            "Tier {} is empty or inverted ({}..{})",
                            i, tier.lower, upper
                        ));
                    }
                    if next.lower != upper {
                        return Err(format!(
                            "Tier {} ends at {} but tier {} starts at {}",
                            i,
                            upper,
                            i + 1,
                            next.lower
                        ));
                    }
                }
                (Some(_), None) => {
                    return Err("Final tier must be unbounded (no upper limit)".to_string());
                }
                (None, Some(_)) => {
                    return Err(format!("Tier {} is unbounded but is not the final tier", i));
                }
                (None, None) => {}
            }
        }

        Ok(())
    }
}

impl TryFrom<Vec<PricingTier>> for PricingTable {
    type Error = String;

    fn try_from(tiers: Vec<PricingTier>) -> Result<Self, Self::Error> {
        Self::new(tiers)
    }
}

impl From<PricingTable> for Vec<PricingTier> {
    fn from(table: PricingTable) -> Self {
        table.tiers
    }
}

/// Result of one calculation request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub log_cost: f64,
    pub user_cost: f64,
    pub total_cost: f64,
}

impl CostBreakdown {
    /// Build a breakdown from its two components
    ///
    /// The total is always the exact sum of the parts. Rounding to currency
    /// precision happens at display time only.
    pub fn new(log_cost: f64, user_cost: f64) -> Self {
        Self {
            log_cost,
            user_cost,
            total_cost: log_cost + user_cost,
        }
    }
}

impl Default for CostBreakdown {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(lower: u64, upper: Option<u64>, rate: f64) -> PricingTier {
        PricingTier { lower, upper, rate }
    }

    #[test]
    fn test_valid_table() {
        let table = PricingTable::new(vec![
            tier(0, Some(100), 0.0),
            tier(100, Some(500), 0.5),
            tier(500, None, 0.1),
        ]);
        assert!(table.is_ok());
        assert_eq!(table.unwrap().tiers().len(), 3);
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(PricingTable::new(vec![]).is_err());
    }

    #[test]
    fn test_first_tier_must_start_at_zero() {
        let result = PricingTable::new(vec![tier(10, None, 0.1)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_gap_rejected() {
        let result = PricingTable::new(vec![
            tier(0, Some(100), 0.0),
            tier(200, None, 0.1), // Gap between 100 and 200
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_overlap_rejected() {
        let result = PricingTable::new(vec![tier(0, Some(100), 0.0), tier(50, None, 0.1)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_bounded_final_tier_rejected() {
        let result = PricingTable::new(vec![tier(0, Some(100), 0.0)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_interior_unbounded_tier_rejected() {
        let result = PricingTable::new(vec![tier(0, None, 0.0), tier(100, None, 0.1)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_rate_rejected() {
        let result = PricingTable::new(vec![tier(0, None, -0.1)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_nan_rate_rejected() {
        let result = PricingTable::new(vec![tier(0, None, f64::NAN)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_tier_width() {
        assert_eq!(tier(100, Some(500), 0.5).width(), Some(400));
        assert_eq!(tier(100, None, 0.5).width(), None);
    }

    #[test]
    fn test_breakdown_total_is_exact_sum() {
        let breakdown = CostBreakdown::new(641.576, 200.0);
        assert_eq!(breakdown.total_cost, 641.576 + 200.0);
    }
}
