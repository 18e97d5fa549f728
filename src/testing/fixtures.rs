use substreams::scalar::BigInt;

use crate::{
    identifiers::token_id,
    models::{BlockMeta, EventMeta, LiquidityPoolAggregator},
};

/// Deterministic 20-byte address rendered as 0x-prefixed hex.
pub fn address(n: u8) -> String {
    format!("0x{}", hex::encode([n; 20]))
}

/// `n` whole tokens scaled to 18 decimals.
pub fn scaled(n: u64) -> BigInt {
    BigInt::from(n) * BigInt::from(10u64).pow(18)
}

/// Event envelope at the given block. The timestamp is derived from the
/// block number so ordered blocks get ordered clocks.
pub fn meta_at(chain_id: u64, src_address: &str, block: u64, log_index: u32) -> EventMeta {
    EventMeta {
        chain_id,
        src_address: src_address.to_string(),
        block: BlockMeta {
            number: block,
            timestamp: 1_700_000_000 + block,
            hash: format!("0x{}", hex::encode([block as u8; 32])),
        },
        log_index,
    }
}

/// A volatile pool aggregator with zeroed totals and fixture tokens.
pub fn pool_with_zeroed_totals(pool: &str, chain_id: u64) -> LiquidityPoolAggregator {
    LiquidityPoolAggregator::new(
        pool,
        chain_id,
        token_id(&address(0xF0), chain_id),
        token_id(&address(0xF1), chain_id),
        false,
        1_700_000_000,
    )
}
