use substreams::scalar::BigInt;
use tracing::debug;

use crate::{
    errors::AggregationError,
    events::{user_stats_for_event, Transition, TransitionContext},
    models::Entity,
    store::StoreSnapshot,
};

/// A flash loan taken from the pool, already priced upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct FlashLoan {
    pub user: String,
    pub amount_usd: BigInt,
    pub fee_usd: BigInt,
}

impl Transition for FlashLoan {
    fn apply(
        &self,
        ctx: &TransitionContext,
        store: &StoreSnapshot,
    ) -> Result<StoreSnapshot, AggregationError> {
        let pool = &ctx.meta.src_address;
        let timestamp = ctx.meta.block.timestamp;

        let mut stats = user_stats_for_event(store, ctx, &self.user);
        stats.number_of_flash_loans += 1;
        stats.total_flash_loan_volume_usd =
            stats.total_flash_loan_volume_usd.clone() + self.amount_usd.clone();
        stats.last_activity_ts = timestamp;

        let mut written = vec![Entity::UserStatsPerPool(stats)];
        match store.pool_aggregator(pool) {
            Some(aggregator) => {
                let mut aggregator = aggregator.clone();
                aggregator.number_of_flash_loans += 1;
                aggregator.total_flash_loan_volume_usd =
                    aggregator.total_flash_loan_volume_usd.clone() + self.amount_usd.clone();
                aggregator.total_fees_usd = aggregator.total_fees_usd.clone() + self.fee_usd.clone();
                aggregator.last_updated_ts = timestamp;
                written.push(Entity::LiquidityPoolAggregator(aggregator));
            }
            None => debug!(%pool, "flash loan on untracked pool, aggregator skipped"),
        }
        Ok(store.set_all(written))
    }
}
