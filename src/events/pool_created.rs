use tracing::debug;

use crate::{
    errors::AggregationError,
    events::{Transition, TransitionContext},
    identifiers::token_id,
    models::{Entity, LiquidityPoolAggregator, Token},
    store::StoreSnapshot,
};

/// A new liquidity pool. The event source address is the pool itself;
/// this is the only flow that materializes an aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolCreated {
    pub token0: String,
    pub token1: String,
    pub is_stable: bool,
}

impl Transition for PoolCreated {
    fn apply(
        &self,
        ctx: &TransitionContext,
        store: &StoreSnapshot,
    ) -> Result<StoreSnapshot, AggregationError> {
        let pool = &ctx.meta.src_address;
        let chain_id = ctx.meta.chain_id;

        if store.pool_aggregator(pool).is_some() {
            debug!(%pool, "pool already tracked, creation skipped");
            return Ok(store.clone());
        }

        let token0_id = token_id(&self.token0, chain_id);
        let token1_id = token_id(&self.token1, chain_id);
        let aggregator = LiquidityPoolAggregator::new(
            pool,
            chain_id,
            token0_id.clone(),
            token1_id.clone(),
            self.is_stable,
            ctx.meta.block.timestamp,
        );

        let mut written = vec![Entity::LiquidityPoolAggregator(aggregator)];
        for (address, id) in [(&self.token0, token0_id), (&self.token1, token1_id)] {
            if store.token(&id).is_none() {
                written.push(Entity::Token(Token::new(address, chain_id, ctx.meta.block.timestamp)));
            }
        }
        Ok(store.set_all(written))
    }
}
