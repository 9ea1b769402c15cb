use serde::{Deserialize, Serialize};

use crate::billing::{PricingTable, PricingTier};

/// Tool configuration: the rate schedule and the flat per-user price
///
/// The tiers are kept as a plain list here so a hand-edited config file can
/// be deserialized before validation; `pricing_table` is the only way to get
/// them into the calculator, and it re-checks the table invariants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub user_price: f64,
    pub tiers: Vec<PricingTier>,
}

impl Config {
    /// Validate and convert the configured tiers into a usable table
    pub fn pricing_table(&self) -> Result<PricingTable, String> {
        PricingTable::new(self.tiers.clone())
    }
}

/// Calculation request read from stdin in non-interactive mode
///
/// Both fields are raw text, validated at the boundary exactly like CLI
/// arguments.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputData {
    #[serde(default)]
    pub logs: String,
    #[serde(default)]
    pub users: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_produces_valid_table() {
        let config = Config::default();
        let table = config.pricing_table();
        assert!(table.is_ok());
        assert_eq!(table.unwrap().tiers().len(), 6);
    }

    #[test]
    fn test_corrupted_tiers_rejected() {
        let mut config = Config::default();
        config.tiers.remove(2); // Leaves a gap in the schedule
        assert!(config.pricing_table().is_err());
    }

    #[test]
    fn test_input_data_missing_fields_default_to_empty() {
        let input: InputData = serde_json::from_str("{}").unwrap();
        assert_eq!(input.logs, "");
        assert_eq!(input.users, "");
    }

    #[test]
    fn test_input_data_from_json() {
        let input: InputData =
            serde_json::from_str(r#"{"logs": "2000000", "users": "37"}"#).unwrap();
        assert_eq!(input.logs, "2000000");
        assert_eq!(input.users, "37");
    }
}
