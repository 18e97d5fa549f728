pub mod config;
pub mod engine;
pub mod errors;
pub mod events;
pub mod identifiers;
pub mod math;
pub mod models;
pub mod oracle;
pub mod store;
pub mod testing;

pub mod prelude {
    pub use super::{
        config::{EngineSettings, InvariantPolicy},
        engine::{AggregationEngine, InboundEvent},
        errors::AggregationError,
        events::*,
        models::*,
        oracle::{NoopOracle, PriceOracle},
        store::StoreSnapshot,
    };
}
