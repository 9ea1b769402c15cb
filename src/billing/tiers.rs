use once_cell::sync::Lazy;

use super::{PricingTable, PricingTier};

/// Flat price per user per month, in dollars
pub const DEFAULT_USER_PRICE: f64 = 20.0;

/// The built-in log volume rate schedule
///
/// First 10k log events per month are free, then the per-event rate steps
/// down through five paid tiers. The final tier has no upper bound, so any
/// volume is billable.
pub static DEFAULT_TABLE: Lazy<PricingTable> = Lazy::new(|| {
    PricingTable::new(default_tiers()).expect("built-in tier table is valid")
});

/// The raw built-in tiers, used to seed a fresh config file
pub fn default_tiers() -> Vec<PricingTier> {
    vec![
        PricingTier {
            lower: 0,
            upper: Some(10_000),
            rate: 0.0,
        },
        PricingTier {
            lower: 10_000,
            upper: Some(2_000_000),
            rate: 0.000_322_4,
        },
        PricingTier {
            lower: 2_000_000,
            upper: Some(15_000_000),
            rate: 0.000_135_2,
        },
        PricingTier {
            lower: 15_000_000,
            upper: Some(50_000_000),
            rate: 0.000_085_2,
        },
        PricingTier {
            lower: 50_000_000,
            upper: Some(100_000_000),
            rate: 0.000_047_3,
        },
        PricingTier {
            lower: 100_000_000,
            upper: None,
            rate: 0.000_024_3,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_valid() {
        // Lazy init panics if the built-in schedule ever violates the
        // table invariants
        assert_eq!(DEFAULT_TABLE.tiers().len(), 6);
    }

    #[test]
    fn test_default_table_shape() {
        let tiers = DEFAULT_TABLE.tiers();
        assert_eq!(tiers[0].rate, 0.0);
        assert_eq!(tiers[0].upper, Some(10_000));
        assert!(tiers[5].is_unbounded());
        assert_eq!(tiers[5].lower, 100_000_000);
    }
}
