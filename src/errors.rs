use substreams::scalar::BigInt;
use thiserror::Error;

/// Errors surfaced by transition application.
///
/// Entity absence is never an error. Each event family has an explicit
/// policy branch for a missing record (create zeroed or no-op), so the
/// only faults a caller can observe are balance invariant violations
/// under the `Fault` policy and malformed engine settings.
#[derive(Debug, Error)]
pub enum AggregationError {
    #[error("balance {field} on {entity_id} would go negative: {current} - {delta}")]
    NegativeBalance {
        entity_id: String,
        field: &'static str,
        current: BigInt,
        delta: BigInt,
    },

    #[error("invalid engine settings: {0}")]
    InvalidSettings(#[from] serde_json::Error),
}
