use substreams::scalar::BigInt;
use tracing::debug;

use crate::{
    errors::AggregationError,
    events::{Transition, TransitionContext},
    models::Entity,
    store::StoreSnapshot,
};

/// Absolute reserve refresh emitted by the pool after every balance
/// change. The event carries final reserves, not deltas.
#[derive(Debug, Clone, PartialEq)]
pub struct Sync {
    pub reserve0: BigInt,
    pub reserve1: BigInt,
}

impl Transition for Sync {
    fn apply(
        &self,
        ctx: &TransitionContext,
        store: &StoreSnapshot,
    ) -> Result<StoreSnapshot, AggregationError> {
        let pool = &ctx.meta.src_address;
        let Some(aggregator) = store.pool_aggregator(pool) else {
            debug!(%pool, "sync on untracked pool, skipped");
            return Ok(store.clone());
        };
        let mut aggregator = aggregator.clone();
        aggregator.reserve0 = self.reserve0.clone();
        aggregator.reserve1 = self.reserve1.clone();
        aggregator.last_updated_ts = ctx.meta.block.timestamp;
        Ok(store.set(Entity::LiquidityPoolAggregator(aggregator)))
    }
}
