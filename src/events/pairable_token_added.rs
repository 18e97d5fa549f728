use crate::{
    errors::AggregationError,
    events::{Transition, TransitionContext},
    identifiers::{launcher_config_key, token_id},
    models::{Entity, PoolLauncherConfig, Token},
    store::StoreSnapshot,
};

/// A token whitelisted for pairing on the launcher. The event source
/// address is the launcher contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairableTokenAdded {
    pub token: String,
}

impl Transition for PairableTokenAdded {
    fn apply(
        &self,
        ctx: &TransitionContext,
        store: &StoreSnapshot,
    ) -> Result<StoreSnapshot, AggregationError> {
        let chain_id = ctx.meta.chain_id;
        let key = launcher_config_key(chain_id, &ctx.meta.src_address);
        let token = self.token.to_lowercase();

        let config = match store.launcher_config(&key) {
            Some(config) => {
                if config.pairable_tokens.contains(&token) {
                    return Ok(store.clone());
                }
                let mut config = config.clone();
                config.pairable_tokens.push(token.clone());
                config
            }
            None => PoolLauncherConfig {
                id: key,
                chain_id,
                launcher: ctx.meta.src_address.to_lowercase(),
                version: "1".to_string(),
                pairable_tokens: vec![token.clone()],
            },
        };

        let token_record = match store.token(&token_id(&self.token, chain_id)) {
            Some(existing) => {
                let mut existing = existing.clone();
                existing.is_whitelisted = true;
                existing
            }
            None => {
                let mut created = Token::new(&self.token, chain_id, ctx.meta.block.timestamp);
                created.is_whitelisted = true;
                created
            }
        };

        Ok(store.set_all(vec![
            Entity::PoolLauncherConfig(config),
            Entity::Token(token_record),
        ]))
    }
}
