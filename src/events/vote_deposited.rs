use substreams::scalar::BigInt;
use tracing::debug;

use crate::{
    errors::AggregationError,
    events::{user_stats_for_event, Transition, TransitionContext},
    models::Entity,
    store::StoreSnapshot,
};

/// Voting power deposited toward the pool's emissions gauge.
#[derive(Debug, Clone, PartialEq)]
pub struct VoteDeposited {
    pub user: String,
    pub votes: BigInt,
    pub votes_usd: BigInt,
}

impl Transition for VoteDeposited {
    fn apply(
        &self,
        ctx: &TransitionContext,
        store: &StoreSnapshot,
    ) -> Result<StoreSnapshot, AggregationError> {
        let pool = &ctx.meta.src_address;
        let timestamp = ctx.meta.block.timestamp;

        let mut stats = user_stats_for_event(store, ctx, &self.user);
        stats.total_votes_deposited = stats.total_votes_deposited.clone() + self.votes.clone();
        stats.total_votes_deposited_usd =
            stats.total_votes_deposited_usd.clone() + self.votes_usd.clone();
        stats.current_voting_power = stats.current_voting_power.clone() + self.votes.clone();
        stats.number_of_votes += 1;
        stats.last_activity_ts = timestamp;

        let mut written = vec![Entity::UserStatsPerPool(stats)];
        match store.pool_aggregator(pool) {
            Some(aggregator) => {
                let mut aggregator = aggregator.clone();
                aggregator.total_votes_deposited =
                    aggregator.total_votes_deposited.clone() + self.votes.clone();
                aggregator.total_votes_deposited_usd =
                    aggregator.total_votes_deposited_usd.clone() + self.votes_usd.clone();
                aggregator.current_voting_power =
                    aggregator.current_voting_power.clone() + self.votes.clone();
                aggregator.number_of_votes += 1;
                aggregator.last_updated_ts = timestamp;
                written.push(Entity::LiquidityPoolAggregator(aggregator));
            }
            None => debug!(%pool, "vote deposit on untracked pool, aggregator skipped"),
        }
        Ok(store.set_all(written))
    }
}
