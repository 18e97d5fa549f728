use substreams::scalar::BigInt;
use tracing::debug;

use crate::{
    errors::AggregationError,
    events::{user_stats_for_event, Transition, TransitionContext},
    models::Entity,
    store::StoreSnapshot,
};

/// Liquidity staked into a pool's gauge. `amount` is the 18-decimal
/// scaled USD value of the staked position.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeDeposit {
    pub user: String,
    pub amount: BigInt,
}

impl Transition for GaugeDeposit {
    fn apply(
        &self,
        ctx: &TransitionContext,
        store: &StoreSnapshot,
    ) -> Result<StoreSnapshot, AggregationError> {
        let pool = &ctx.meta.src_address;
        let timestamp = ctx.meta.block.timestamp;

        let mut stats = user_stats_for_event(store, ctx, &self.user);
        stats.number_of_gauge_deposits += 1;
        stats.current_liquidity_staked_usd =
            stats.current_liquidity_staked_usd.clone() + self.amount.clone();
        stats.last_activity_ts = timestamp;

        let mut written = vec![Entity::UserStatsPerPool(stats)];
        match store.pool_aggregator(pool) {
            Some(aggregator) => {
                let mut aggregator = aggregator.clone();
                aggregator.number_of_gauge_deposits += 1;
                aggregator.current_liquidity_staked_usd =
                    aggregator.current_liquidity_staked_usd.clone() + self.amount.clone();
                aggregator.last_updated_ts = timestamp;
                written.push(Entity::LiquidityPoolAggregator(aggregator));
            }
            None => debug!(%pool, "gauge deposit on untracked pool, aggregator skipped"),
        }
        Ok(store.set_all(written))
    }
}
