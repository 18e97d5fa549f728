use substreams::scalar::BigInt;
use tracing::debug;

use crate::{
    errors::AggregationError,
    events::{user_stats_for_event, Transition, TransitionContext},
    math::{abs, bps_share, mul_div_1e18},
    models::Entity,
    store::StoreSnapshot,
};

/// A swap against the pool. Amounts are signed token deltas from the
/// pool's perspective; `volume_usd` is carried when the upstream
/// decoder already priced the swap, otherwise the engine derives it
/// through the oracle from token0.
#[derive(Debug, Clone, PartialEq)]
pub struct Swap {
    pub user: String,
    pub amount0: BigInt,
    pub amount1: BigInt,
    pub volume_usd: Option<BigInt>,
}

impl Transition for Swap {
    fn apply(
        &self,
        ctx: &TransitionContext,
        store: &StoreSnapshot,
    ) -> Result<StoreSnapshot, AggregationError> {
        let pool = &ctx.meta.src_address;
        let timestamp = ctx.meta.block.timestamp;
        let volume0 = abs(&self.amount0);
        let volume1 = abs(&self.amount1);

        let mut written = Vec::with_capacity(2);
        let volume_usd = match store.pool_aggregator(pool) {
            Some(aggregator) => {
                let volume_usd = match &self.volume_usd {
                    Some(value) => value.clone(),
                    None => match ctx.oracle.price_of(&aggregator.token0, timestamp) {
                        Some(price) => mul_div_1e18(&volume0, &price),
                        None => {
                            debug!(%pool, token = %aggregator.token0, "no price for swap, USD volume not accrued");
                            BigInt::zero()
                        }
                    },
                };
                let fee_bps = if aggregator.is_stable {
                    ctx.settings.stable_fee_bps
                } else {
                    ctx.settings.volatile_fee_bps
                };

                let mut aggregator = aggregator.clone();
                aggregator.total_volume0 = aggregator.total_volume0.clone() + volume0;
                aggregator.total_volume1 = aggregator.total_volume1.clone() + volume1;
                aggregator.total_volume_usd =
                    aggregator.total_volume_usd.clone() + volume_usd.clone();
                aggregator.total_fees_usd =
                    aggregator.total_fees_usd.clone() + bps_share(&volume_usd, fee_bps);
                aggregator.number_of_swaps += 1;
                aggregator.last_updated_ts = timestamp;
                written.push(Entity::LiquidityPoolAggregator(aggregator));
                volume_usd
            }
            None => {
                debug!(%pool, "swap on untracked pool, aggregator skipped");
                self.volume_usd.clone().unwrap_or_else(BigInt::zero)
            }
        };

        let mut stats = user_stats_for_event(store, ctx, &self.user);
        stats.number_of_swaps += 1;
        stats.total_swap_volume_usd = stats.total_swap_volume_usd.clone() + volume_usd;
        stats.last_activity_ts = timestamp;
        written.push(Entity::UserStatsPerPool(stats));

        Ok(store.set_all(written))
    }
}
