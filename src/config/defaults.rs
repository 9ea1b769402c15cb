use super::types::Config;
use crate::billing::tiers::{default_tiers, DEFAULT_USER_PRICE};

impl Default for Config {
    fn default() -> Self {
        Config {
            user_price: DEFAULT_USER_PRICE,
            tiers: default_tiers(),
        }
    }
}
