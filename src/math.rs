//! Integer arithmetic over 18-decimal scaled amounts.
//!
//! All amounts flow through `substreams::scalar::BigInt`; the helpers
//! here route intermediate products through `num_bigint::BigUint` so
//! multiplication never truncates before the division.

use num_bigint::BigUint;
use substreams::scalar::BigInt;
use tracing::warn;

use crate::{config::InvariantPolicy, errors::AggregationError};

const BPS_DENOMINATOR: u32 = 10_000;

fn to_biguint(value: &BigInt) -> BigUint {
    let (_sign, bytes) = value.to_bytes_be();
    BigUint::from_bytes_be(&bytes)
}

fn to_bigint(value: &BigUint) -> BigInt {
    BigInt::from_unsigned_bytes_be(&value.to_bytes_be())
}

fn scale_1e18() -> BigUint {
    BigUint::from(10u32).pow(18)
}

pub fn abs(value: &BigInt) -> BigInt {
    if value < &BigInt::zero() {
        value.neg()
    } else {
        value.clone()
    }
}

/// Computes `amount * price / 10^18`, truncating toward zero.
///
/// Both operands are 18-decimal scaled, so the product carries 36
/// decimals and must be divided back down before it is stored.
pub fn mul_div_1e18(amount: &BigInt, price: &BigInt) -> BigInt {
    let product = to_biguint(amount) * to_biguint(price);
    to_bigint(&(product / scale_1e18()))
}

/// Computes the `bps` basis-point share of `amount`, truncating toward
/// zero.
pub fn bps_share(amount: &BigInt, bps: u64) -> BigInt {
    let share = to_biguint(amount) * BigUint::from(bps) / BigUint::from(BPS_DENOMINATOR);
    to_bigint(&share)
}

/// Subtracts `delta` from `current` under the non-negative balance rule.
///
/// A result below zero is an invariant violation: `Clamp` stores zero
/// and logs the overdraft, `Fault` returns the violation to the caller
/// without writing. A negative value is never returned.
pub fn sub_guarded(
    current: &BigInt,
    delta: &BigInt,
    policy: InvariantPolicy,
    entity_id: &str,
    field: &'static str,
) -> Result<BigInt, AggregationError> {
    if delta <= current {
        return Ok(current.clone() - delta.clone());
    }
    match policy {
        InvariantPolicy::Clamp => {
            let overdraft = delta.clone() - current.clone();
            warn!(entity_id, field, %overdraft, "balance overdraft clamped to zero");
            Ok(BigInt::zero())
        }
        InvariantPolicy::Fault => Err(AggregationError::NegativeBalance {
            entity_id: entity_id.to_string(),
            field,
            current: current.clone(),
            delta: delta.clone(),
        }),
    }
}
