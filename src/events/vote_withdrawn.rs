use substreams::scalar::BigInt;
use tracing::debug;

use crate::{
    errors::AggregationError,
    events::{user_stats_for_event, Transition, TransitionContext},
    math::sub_guarded,
    models::Entity,
    store::StoreSnapshot,
};

/// Voting power pulled back from the pool. Only the current voting
/// power moves; deposit totals are monotonic and stay put.
#[derive(Debug, Clone, PartialEq)]
pub struct VoteWithdrawn {
    pub user: String,
    pub votes: BigInt,
}

impl Transition for VoteWithdrawn {
    fn apply(
        &self,
        ctx: &TransitionContext,
        store: &StoreSnapshot,
    ) -> Result<StoreSnapshot, AggregationError> {
        let pool = &ctx.meta.src_address;
        let policy = ctx.settings.invariant_policy;
        let timestamp = ctx.meta.block.timestamp;

        let mut stats = user_stats_for_event(store, ctx, &self.user);
        stats.current_voting_power = sub_guarded(
            &stats.current_voting_power,
            &self.votes,
            policy,
            &stats.id,
            "current_voting_power",
        )?;
        stats.last_activity_ts = timestamp;

        let mut written = vec![Entity::UserStatsPerPool(stats)];
        match store.pool_aggregator(pool) {
            Some(aggregator) => {
                let mut aggregator = aggregator.clone();
                aggregator.current_voting_power = sub_guarded(
                    &aggregator.current_voting_power,
                    &self.votes,
                    policy,
                    &aggregator.id,
                    "current_voting_power",
                )?;
                aggregator.last_updated_ts = timestamp;
                written.push(Entity::LiquidityPoolAggregator(aggregator));
            }
            None => debug!(%pool, "vote withdraw on untracked pool, aggregator skipped"),
        }
        Ok(store.set_all(written))
    }
}
