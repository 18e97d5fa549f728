use tracing::debug;

use crate::{
    errors::AggregationError,
    events::{Transition, TransitionContext},
    identifiers::launcher_pool_key,
    models::Entity,
    store::StoreSnapshot,
};

/// Administrative correction of a launcher pool's creation timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationTimestampSet {
    pub pool: String,
    pub created_at: u64,
}

impl Transition for CreationTimestampSet {
    fn apply(
        &self,
        ctx: &TransitionContext,
        store: &StoreSnapshot,
    ) -> Result<StoreSnapshot, AggregationError> {
        let key = launcher_pool_key(ctx.meta.chain_id, &self.pool);
        let Some(record) = store.launcher_pool(&key) else {
            debug!(pool = %self.pool, "timestamp set for unknown launcher pool, skipped");
            return Ok(store.clone());
        };
        let mut record = record.clone();
        record.created_at = self.created_at;
        Ok(store.set(Entity::PoolLauncherPool(record)))
    }
}
