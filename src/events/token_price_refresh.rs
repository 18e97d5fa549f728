use tracing::debug;

use crate::{
    errors::AggregationError,
    events::{Transition, TransitionContext},
    identifiers::token_id,
    models::Entity,
    store::StoreSnapshot,
};

/// Oracle-driven refresh of a token's USD price. Routed through the
/// transition pipeline so price updates get the same snapshot
/// semantics as every other write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPriceRefresh {
    pub token: String,
}

impl Transition for TokenPriceRefresh {
    fn apply(
        &self,
        ctx: &TransitionContext,
        store: &StoreSnapshot,
    ) -> Result<StoreSnapshot, AggregationError> {
        let id = token_id(&self.token, ctx.meta.chain_id);
        let Some(token) = store.token(&id) else {
            debug!(token = %id, "price refresh for unknown token, skipped");
            return Ok(store.clone());
        };
        let Some(price) = ctx
            .oracle
            .price_of(&id, ctx.meta.block.timestamp)
        else {
            debug!(token = %id, "oracle abstained, price kept");
            return Ok(store.clone());
        };
        let mut token = token.clone();
        token.price_per_usd = price;
        token.last_updated_ts = ctx.meta.block.timestamp;
        Ok(store.set(Entity::Token(token)))
    }
}
