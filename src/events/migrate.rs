use tracing::debug;

use crate::{
    errors::AggregationError,
    events::{Transition, TransitionContext},
    identifiers::launcher_pool_key,
    models::{Entity, PoolLauncherPool},
    store::StoreSnapshot,
};

/// A launcher pool migrated to a new underlying pool. The event source
/// address is the launcher contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Migrate {
    pub underlying_pool: String,
    pub locker: String,
    pub new_locker: String,
    pub pair_token: String,
    pub pool_launcher_token: String,
    pub new_pool: String,
}

impl Transition for Migrate {
    fn apply(
        &self,
        ctx: &TransitionContext,
        store: &StoreSnapshot,
    ) -> Result<StoreSnapshot, AggregationError> {
        let chain_id = ctx.meta.chain_id;
        let timestamp = ctx.meta.block.timestamp;
        let source_key = launcher_pool_key(chain_id, &self.underlying_pool);

        // A migration only makes sense for a pool the launcher created.
        let Some(source) = store.launcher_pool(&source_key) else {
            debug!(pool = %self.underlying_pool, "migrate without prior launch, skipped");
            return Ok(store.clone());
        };

        let mut source = source.clone();
        source.migrated_to = Some(self.new_pool.clone());
        source.old_locker = Some(self.locker.to_lowercase());
        source.new_locker = Some(self.new_locker.to_lowercase());
        source.last_migrated_at = Some(timestamp);

        let destination = PoolLauncherPool {
            id: launcher_pool_key(chain_id, &self.new_pool),
            chain_id,
            pool: self.new_pool.clone(),
            launcher: source.launcher.clone(),
            creator: source.creator.clone(),
            pool_launcher_token: self.pool_launcher_token.to_lowercase(),
            pair_token: self.pair_token.to_lowercase(),
            is_emerging: false,
            created_at: timestamp,
            last_migrated_at: None,
            migrated_from: Some(self.underlying_pool.clone()),
            migrated_to: None,
            old_locker: None,
            new_locker: None,
            last_flag_update_at: None,
        };

        Ok(store.set_all(vec![
            Entity::PoolLauncherPool(source),
            Entity::PoolLauncherPool(destination),
        ]))
    }
}
