use tracing::debug;

use crate::{
    errors::AggregationError,
    events::{Transition, TransitionContext},
    identifiers::launcher_pool_key,
    models::Entity,
    store::StoreSnapshot,
};

/// A launcher pool flagged as emerging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmergingFlagged {
    pub pool: String,
}

impl Transition for EmergingFlagged {
    fn apply(
        &self,
        ctx: &TransitionContext,
        store: &StoreSnapshot,
    ) -> Result<StoreSnapshot, AggregationError> {
        let key = launcher_pool_key(ctx.meta.chain_id, &self.pool);
        let Some(record) = store.launcher_pool(&key) else {
            debug!(pool = %self.pool, "emerging flag for unknown launcher pool, skipped");
            return Ok(store.clone());
        };
        let mut record = record.clone();
        record.is_emerging = true;
        record.last_flag_update_at = Some(ctx.meta.block.timestamp);
        Ok(store.set(Entity::PoolLauncherPool(record)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::EngineSettings,
        events::Launch,
        oracle::NoopOracle,
        testing::fixtures::{address, meta_at},
    };

    #[test]
    fn flag_flips_emerging_and_stamps_the_update() {
        let launcher = address(9);
        let pool = address(1);
        let settings = EngineSettings::default();

        let meta = meta_at(10, &launcher, 90, 0);
        let ctx = TransitionContext { meta: &meta, settings: &settings, oracle: &NoopOracle };
        let store = Launch {
            pool: pool.clone(),
            sender: address(2),
            pool_launcher_token: address(3),
            pair_token: address(4),
        }
        .apply(&ctx, &StoreSnapshot::new())
        .unwrap();

        let meta = meta_at(10, &launcher, 100, 0);
        let ctx = TransitionContext { meta: &meta, settings: &settings, oracle: &NoopOracle };
        let store = EmergingFlagged { pool: pool.clone() }
            .apply(&ctx, &store)
            .unwrap();

        let record = store
            .launcher_pool(&launcher_pool_key(10, &pool))
            .unwrap();
        assert!(record.is_emerging);
        assert_eq!(record.last_flag_update_at, Some(meta.block.timestamp));
    }

    #[test]
    fn flag_for_unknown_pool_is_a_noop() {
        let launcher = address(9);
        let meta = meta_at(10, &launcher, 100, 0);
        let settings = EngineSettings::default();
        let ctx = TransitionContext { meta: &meta, settings: &settings, oracle: &NoopOracle };
        let store = EmergingFlagged { pool: address(1) }
            .apply(&ctx, &StoreSnapshot::new())
            .unwrap();
        assert!(store.is_empty());
    }
}
