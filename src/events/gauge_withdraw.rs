use substreams::scalar::BigInt;
use tracing::debug;

use crate::{
    errors::AggregationError,
    events::{user_stats_for_event, Transition, TransitionContext},
    math::sub_guarded,
    models::Entity,
    store::StoreSnapshot,
};

/// Liquidity unstaked from a pool's gauge. `amount` is the 18-decimal
/// scaled USD value leaving the staked position.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeWithdraw {
    pub user: String,
    pub amount: BigInt,
}

impl Transition for GaugeWithdraw {
    fn apply(
        &self,
        ctx: &TransitionContext,
        store: &StoreSnapshot,
    ) -> Result<StoreSnapshot, AggregationError> {
        let pool = &ctx.meta.src_address;
        let policy = ctx.settings.invariant_policy;
        let timestamp = ctx.meta.block.timestamp;

        let mut stats = user_stats_for_event(store, ctx, &self.user);
        stats.current_liquidity_staked_usd = sub_guarded(
            &stats.current_liquidity_staked_usd,
            &self.amount,
            policy,
            &stats.id,
            "current_liquidity_staked_usd",
        )?;
        stats.number_of_gauge_withdrawals += 1;
        stats.last_activity_ts = timestamp;

        let mut written = vec![Entity::UserStatsPerPool(stats)];
        match store.pool_aggregator(pool) {
            Some(aggregator) => {
                let mut aggregator = aggregator.clone();
                aggregator.current_liquidity_staked_usd = sub_guarded(
                    &aggregator.current_liquidity_staked_usd,
                    &self.amount,
                    policy,
                    &aggregator.id,
                    "current_liquidity_staked_usd",
                )?;
                aggregator.number_of_gauge_withdrawals += 1;
                aggregator.last_updated_ts = timestamp;
                written.push(Entity::LiquidityPoolAggregator(aggregator));
            }
            None => debug!(%pool, "gauge withdraw on untracked pool, aggregator skipped"),
        }
        Ok(store.set_all(written))
    }
}
