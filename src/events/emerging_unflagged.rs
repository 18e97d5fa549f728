use tracing::debug;

use crate::{
    errors::AggregationError,
    events::{Transition, TransitionContext},
    identifiers::launcher_pool_key,
    models::Entity,
    store::StoreSnapshot,
};

/// A launcher pool cleared of its emerging flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmergingUnflagged {
    pub pool: String,
}

impl Transition for EmergingUnflagged {
    fn apply(
        &self,
        ctx: &TransitionContext,
        store: &StoreSnapshot,
    ) -> Result<StoreSnapshot, AggregationError> {
        let key = launcher_pool_key(ctx.meta.chain_id, &self.pool);
        let Some(record) = store.launcher_pool(&key) else {
            debug!(pool = %self.pool, "emerging unflag for unknown launcher pool, skipped");
            return Ok(store.clone());
        };
        let mut record = record.clone();
        record.is_emerging = false;
        record.last_flag_update_at = Some(ctx.meta.block.timestamp);
        Ok(store.set(Entity::PoolLauncherPool(record)))
    }
}
