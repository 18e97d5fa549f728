use substreams::scalar::BigInt;

/// Price lookup seam for USD derivation.
///
/// Transitions consult the oracle only where an event does not carry a
/// USD amount itself (swaps without an indexed USD value, token price
/// refreshes). Gauge events carry USD amounts directly and never reach
/// it.
///
/// # Arguments
///
/// * `token_id` - Store id of the token (`lowercase(address)-chainId`).
/// * `at_ts` - Block timestamp, epoch seconds.
///
/// # Returns
///
/// The 18-decimal scaled USD price, or `None` when the oracle has no
/// answer for that token at that time. Abstaining is not an error.
pub trait PriceOracle {
    fn price_of(&self, token_id: &str, at_ts: u64) -> Option<BigInt>;
}

/// Oracle that always abstains. Engine default when no price source is
/// wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopOracle;

impl PriceOracle for NoopOracle {
    fn price_of(&self, _token_id: &str, _at_ts: u64) -> Option<BigInt> {
        None
    }
}
