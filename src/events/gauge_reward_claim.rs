use substreams::scalar::BigInt;
use tracing::debug;

use crate::{
    errors::AggregationError,
    events::{user_stats_for_event, Transition, TransitionContext},
    models::Entity,
    store::StoreSnapshot,
};

/// Gauge emission rewards claimed by a staker. `amount` is the
/// 18-decimal scaled USD value of the claim.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeRewardClaim {
    pub user: String,
    pub amount: BigInt,
}

impl Transition for GaugeRewardClaim {
    fn apply(
        &self,
        ctx: &TransitionContext,
        store: &StoreSnapshot,
    ) -> Result<StoreSnapshot, AggregationError> {
        let pool = &ctx.meta.src_address;
        let timestamp = ctx.meta.block.timestamp;

        let mut stats = user_stats_for_event(store, ctx, &self.user);
        stats.number_of_gauge_reward_claims += 1;
        stats.total_gauge_rewards_claimed_usd =
            stats.total_gauge_rewards_claimed_usd.clone() + self.amount.clone();
        stats.last_activity_ts = timestamp;

        let mut written = vec![Entity::UserStatsPerPool(stats)];
        match store.pool_aggregator(pool) {
            Some(aggregator) => {
                let mut aggregator = aggregator.clone();
                aggregator.number_of_gauge_reward_claims += 1;
                aggregator.total_gauge_rewards_claimed_usd =
                    aggregator.total_gauge_rewards_claimed_usd.clone() + self.amount.clone();
                aggregator.last_updated_ts = timestamp;
                written.push(Entity::LiquidityPoolAggregator(aggregator));
            }
            None => debug!(%pool, "reward claim on untracked pool, aggregator skipped"),
        }
        Ok(store.set_all(written))
    }
}
