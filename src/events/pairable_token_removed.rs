use tracing::debug;

use crate::{
    errors::AggregationError,
    events::{Transition, TransitionContext},
    identifiers::{launcher_config_key, token_id},
    models::Entity,
    store::StoreSnapshot,
};

/// A token removed from the launcher's pairing whitelist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairableTokenRemoved {
    pub token: String,
}

impl Transition for PairableTokenRemoved {
    fn apply(
        &self,
        ctx: &TransitionContext,
        store: &StoreSnapshot,
    ) -> Result<StoreSnapshot, AggregationError> {
        let chain_id = ctx.meta.chain_id;
        let key = launcher_config_key(chain_id, &ctx.meta.src_address);
        let token = self.token.to_lowercase();

        // Removal never creates a config.
        let Some(config) = store.launcher_config(&key) else {
            debug!(launcher = %ctx.meta.src_address, "token removal without config, skipped");
            return Ok(store.clone());
        };

        let mut config = config.clone();
        config
            .pairable_tokens
            .retain(|member| member != &token);

        let mut written = vec![Entity::PoolLauncherConfig(config)];
        if let Some(existing) = store.token(&token_id(&self.token, chain_id)) {
            let mut existing = existing.clone();
            existing.is_whitelisted = false;
            written.push(Entity::Token(existing));
        }
        Ok(store.set_all(written))
    }
}
