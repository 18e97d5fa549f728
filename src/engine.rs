//! Ordered event dispatch over the copy-on-write store.
//!
//! One engine instance serves one logical stream. Events must arrive
//! ordered by `(block number, log index)` per chain; the engine keeps a
//! per-chain cursor to spot regressions but applies events exactly in
//! the order the caller feeds them. Repair belongs upstream.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::{
    config::EngineSettings,
    errors::AggregationError,
    events::{EventType, TransitionContext},
    models::EventMeta,
    oracle::{NoopOracle, PriceOracle},
    store::StoreSnapshot,
};

/// A decoded on-chain event with its envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct InboundEvent {
    pub meta: EventMeta,
    pub payload: EventType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Cursor {
    block: u64,
    log_index: u32,
}

pub struct AggregationEngine {
    settings: EngineSettings,
    oracle: Box<dyn PriceOracle>,
    cursors: HashMap<u64, Cursor>,
}

impl Default for AggregationEngine {
    fn default() -> Self {
        Self::new(EngineSettings::default(), Box::new(NoopOracle))
    }
}

impl AggregationEngine {
    pub fn new(settings: EngineSettings, oracle: Box<dyn PriceOracle>) -> Self {
        Self { settings, oracle, cursors: HashMap::new() }
    }

    /// Applies one event and returns the next store snapshot.
    ///
    /// The input snapshot is never mutated; callers that want to
    /// branch can keep it and apply a different event against it.
    pub fn apply(
        &mut self,
        event: &InboundEvent,
        store: &StoreSnapshot,
    ) -> Result<StoreSnapshot, AggregationError> {
        let meta = &event.meta;
        let incoming = Cursor { block: meta.block.number, log_index: meta.log_index };
        match self.cursors.get(&meta.chain_id) {
            Some(cursor) if incoming < *cursor => warn!(
                chain_id = meta.chain_id,
                block = meta.block.number,
                log_index = meta.log_index,
                cursor_block = cursor.block,
                cursor_log_index = cursor.log_index,
                "event ordering regression, applying as received"
            ),
            _ => {}
        }
        self.cursors.insert(meta.chain_id, incoming);

        debug!(
            chain_id = meta.chain_id,
            block = meta.block.number,
            event = event.payload.name(),
            "applying event"
        );
        let ctx = TransitionContext {
            meta,
            settings: &self.settings,
            oracle: self.oracle.as_ref(),
        };
        event.payload.apply(&ctx, store)
    }

    /// Folds an ordered batch of events into `store`.
    pub fn replay(
        &mut self,
        events: &[InboundEvent],
        store: StoreSnapshot,
    ) -> Result<StoreSnapshot, AggregationError> {
        events
            .iter()
            .try_fold(store, |snapshot, event| self.apply(event, &snapshot))
    }
}
