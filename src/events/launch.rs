use tracing::debug;

use crate::{
    errors::AggregationError,
    events::{Transition, TransitionContext},
    identifiers::launcher_pool_key,
    models::{Entity, PoolLauncherPool},
    store::StoreSnapshot,
};

/// A pool deployed through the pool launcher. The event source address
/// is the launcher contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launch {
    pub pool: String,
    pub sender: String,
    pub pool_launcher_token: String,
    pub pair_token: String,
}

impl Transition for Launch {
    fn apply(
        &self,
        ctx: &TransitionContext,
        store: &StoreSnapshot,
    ) -> Result<StoreSnapshot, AggregationError> {
        let chain_id = ctx.meta.chain_id;
        let key = launcher_pool_key(chain_id, &self.pool);
        let record = PoolLauncherPool {
            id: key.clone(),
            chain_id,
            pool: self.pool.clone(),
            launcher: ctx.meta.src_address.to_lowercase(),
            creator: self.sender.to_lowercase(),
            pool_launcher_token: self.pool_launcher_token.to_lowercase(),
            pair_token: self.pair_token.to_lowercase(),
            is_emerging: false,
            created_at: ctx.meta.block.timestamp,
            last_migrated_at: None,
            migrated_from: None,
            migrated_to: None,
            old_locker: None,
            new_locker: None,
            last_flag_update_at: None,
        };

        let mut written = vec![Entity::PoolLauncherPool(record)];
        match store.pool_aggregator(&self.pool) {
            Some(aggregator) => {
                let mut aggregator = aggregator.clone();
                aggregator.pool_launcher_pool_id = Some(key);
                aggregator.last_updated_ts = ctx.meta.block.timestamp;
                written.push(Entity::LiquidityPoolAggregator(aggregator));
            }
            None => debug!(pool = %self.pool, "launch for untracked pool, aggregator link skipped"),
        }
        Ok(store.set_all(written))
    }
}
