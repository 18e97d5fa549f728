//! Deterministic fixtures and doubles for exercising transitions.

use std::collections::HashMap;

use substreams::scalar::BigInt;

use crate::oracle::PriceOracle;

pub mod fixtures;

/// Price oracle backed by a fixed table, for tests that need USD
/// derivation without a real price source.
#[derive(Debug, Clone, Default)]
pub struct StaticPriceOracle {
    prices: HashMap<String, BigInt>,
}

impl StaticPriceOracle {
    pub fn set_price(&mut self, token_id: &str, price: BigInt) {
        self.prices.insert(token_id.to_string(), price);
    }
}

impl PriceOracle for StaticPriceOracle {
    fn price_of(&self, token_id: &str, _at_ts: u64) -> Option<BigInt> {
        self.prices.get(token_id).cloned()
    }
}
