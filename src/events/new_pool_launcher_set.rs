use tracing::debug;

use crate::{
    errors::AggregationError,
    events::{Transition, TransitionContext},
    identifiers::launcher_config_key,
    models::{Entity, PoolLauncherConfig},
    store::StoreSnapshot,
};

/// The launcher contract address rotated to a new deployment. The event
/// source address is the old launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPoolLauncherSet {
    pub new_launcher: String,
}

impl Transition for NewPoolLauncherSet {
    fn apply(
        &self,
        ctx: &TransitionContext,
        store: &StoreSnapshot,
    ) -> Result<StoreSnapshot, AggregationError> {
        let chain_id = ctx.meta.chain_id;
        let old_key = launcher_config_key(chain_id, &ctx.meta.src_address);

        let Some(old_config) = store.launcher_config(&old_key) else {
            debug!(launcher = %ctx.meta.src_address, "launcher rotation without config, skipped");
            return Ok(store.clone());
        };

        // The old record stays readable for consumers mid-replay; the
        // store has no delete.
        let copied = PoolLauncherConfig {
            id: launcher_config_key(chain_id, &self.new_launcher),
            chain_id,
            launcher: self.new_launcher.to_lowercase(),
            version: old_config.version.clone(),
            pairable_tokens: old_config.pairable_tokens.clone(),
        };
        Ok(store.set(Entity::PoolLauncherConfig(copied)))
    }
}
